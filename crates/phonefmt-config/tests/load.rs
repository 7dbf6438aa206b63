use std::env;
use std::fs;
use std::path::PathBuf;

use phonefmt_config::{load, resolve_config_path, ConfigError};
use tempfile::TempDir;

#[test]
fn explicit_path_must_exist() {
    let temp = TempDir::new().expect("tempdir");
    let err = load(Some(temp.path().join("missing.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::MissingConfigFile(_)));
}

#[test]
fn empty_explicit_path_is_invalid() {
    let err = resolve_config_path(Some(PathBuf::new())).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfigPath(_)));
}

#[test]
fn named_formatter_applies_config() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[templates]\ndotted = \"NNN.NNN.NNNN\"\nintl = \"+1 (NNN) NNN-NNNN\"\n",
    )
    .expect("write config");

    let config = load(Some(path)).expect("load");

    let dotted = config.formatter(Some("dotted")).expect("dotted formatter");
    let formatted = dotted.format(Some("(212) 555-1212")).expect("format");
    assert_eq!(formatted.as_deref(), Some("212.555.1212"));

    let intl = config.formatter(Some("intl")).expect("intl formatter");
    let formatted = intl.format(Some("12125551212")).expect("format");
    assert_eq!(formatted.as_deref(), Some("+1 (212) 555-1212"));

    assert!(config.formatter(Some("missing")).is_none());
}

#[test]
fn default_formatter_uses_default_template() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("config.toml");
    fs::write(&path, "").expect("write config");

    let config = load(Some(path)).expect("load");
    let formatter = config.formatter(None).expect("default formatter");
    let formatted = formatter.format(Some("212.555.1212")).expect("format");
    assert_eq!(formatted.as_deref(), Some("(212) 555-1212"));
}

#[test]
fn invalid_template_in_file_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("config.toml");
    fs::write(&path, "default_template = \"NNN\"\n").expect("write config");

    let err = load(Some(path)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("default_template"));
}

// Every case that touches XDG_CONFIG_HOME lives in this one test so the
// process environment is never mutated concurrently.
#[test]
fn resolves_and_loads_from_xdg_config_home() {
    let previous = env::var_os("XDG_CONFIG_HOME");
    let temp = TempDir::new().expect("tempdir");
    env::set_var("XDG_CONFIG_HOME", temp.path());

    let expected = temp.path().join("phonefmt").join("config.toml");
    let resolved = resolve_config_path(None).expect("resolve");
    assert_eq!(resolved, expected);

    let config = load(None).expect("load without file");
    assert!(config.options.normalize);
    assert_eq!(config.default_template.as_str(), "(NNN) NNN-NNNN");
    assert!(config.templates.is_empty());

    fs::create_dir_all(expected.parent().expect("parent")).expect("create config dir");
    fs::write(
        &expected,
        "default_template = \"NNN.NNN.NNNN\"\n[format]\nnormalize = false\n",
    )
    .expect("write config");
    let config = load(None).expect("load with file");
    assert!(!config.options.normalize);
    assert_eq!(config.default_template.as_str(), "NNN.NNN.NNNN");

    env::set_var("XDG_CONFIG_HOME", "");
    let err = resolve_config_path(None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfigPath(_)));
    let config = load(None).expect("load with empty XDG_CONFIG_HOME");
    assert!(config.options.normalize);

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }
}
