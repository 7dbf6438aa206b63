use serde::{Deserialize, Serialize};

use crate::error::PhoneError;
use crate::number::CanonicalNumber;
use crate::template::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Normalize the input before templating. When off, the input is used
    /// as-is and is expected to already be ten bare digits.
    pub normalize: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { normalize: true }
    }
}

/// A parsed template paired with the options to apply it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    template: Template,
    options: FormatOptions,
}

impl Formatter {
    pub fn new(template: Template, options: FormatOptions) -> Self {
        Self { template, options }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    pub fn format(&self, raw: Option<&str>) -> Result<Option<String>, PhoneError> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        apply(&self.template, raw, self.options).map(Some)
    }
}

/// Formats `raw` through `template` with default options.
pub fn format(raw: Option<&str>, template: &str) -> Result<Option<String>, PhoneError> {
    format_with(raw, template, FormatOptions::default())
}

/// Formats `raw` through `template`.
///
/// Missing input short-circuits to `Ok(None)` before the template is parsed.
pub fn format_with(
    raw: Option<&str>,
    template: &str,
    options: FormatOptions,
) -> Result<Option<String>, PhoneError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let template = Template::parse(template)?;
    apply(&template, raw, options).map(Some)
}

fn apply(template: &Template, raw: &str, options: FormatOptions) -> Result<String, PhoneError> {
    if options.normalize {
        let number = CanonicalNumber::parse(raw)?;
        Ok(template.render(&number))
    } else {
        template.fill(raw)
    }
}
