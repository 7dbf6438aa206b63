use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonefmt_core::{FormatOptions, Formatter, PhoneError, Template};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "phonefmt";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub options: FormatOptions,
    pub default_template: Template,
    pub templates: BTreeMap<String, Template>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            options: FormatOptions::default(),
            default_template: Template::default(),
            templates: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Builds a formatter for the named template, or the default one when `name` is `None`.
    pub fn formatter(&self, name: Option<&str>) -> Option<Formatter> {
        let template = match name {
            Some(name) => self.template(name)?,
            None => &self.default_template,
        };
        Some(Formatter::new(template.clone(), self.options))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid template {name}: {source}")]
    InvalidTemplate {
        name: String,
        #[source]
        source: PhoneError,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_template: Option<String>,
    format: Option<FormatFile>,
    #[serde(default)]
    templates: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormatFile {
    normalize: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => {
            debug!(path = %path.display(), "config resolved");
            Ok(config)
        }
        None => {
            debug!(path = %path.display(), "config missing, using defaults");
            Ok(AppConfig::default())
        }
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(format) = parsed.format {
        if let Some(normalize) = format.normalize {
            config.options.normalize = normalize;
        }
    }

    if let Some(raw) = parsed.default_template {
        config.default_template = parse_template("default_template", &raw)?;
    }

    for (name, raw) in parsed.templates {
        let template = parse_template(&name, &raw)?;
        config.templates.insert(name, template);
    }

    Ok(config)
}

fn parse_template(name: &str, raw: &str) -> Result<Template> {
    Template::parse(raw).map_err(|source| ConfigError::InvalidTemplate {
        name: name.to_string(),
        source,
    })
}
