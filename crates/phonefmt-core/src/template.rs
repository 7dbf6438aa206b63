use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PhoneError;
use crate::number::{CanonicalNumber, CANONICAL_LEN};

/// Marks a digit slot in a template. Matching is case-sensitive.
pub const PLACEHOLDER: char = 'N';

/// Placeholders a template must carry, one per canonical digit.
pub const PLACEHOLDER_COUNT: usize = CANONICAL_LEN;

pub const DEFAULT_TEMPLATE: &str = "(NNN) NNN-NNNN";

/// A template such as `(NNN) NNN-NNNN`.
///
/// Each [`PLACEHOLDER`] is filled from the number left to right. Every other
/// character, digits included, is copied through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template(String);

impl Template {
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        let placeholders = count_placeholders(raw);
        if placeholders != PLACEHOLDER_COUNT {
            return Err(PhoneError::InvalidTemplate {
                template: raw.to_string(),
                placeholders,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn placeholders(&self) -> usize {
        count_placeholders(&self.0)
    }

    pub fn render(&self, number: &CanonicalNumber) -> String {
        let mut digits = number.as_str().chars();
        self.0
            .chars()
            .filter_map(|ch| if ch == PLACEHOLDER { digits.next() } else { Some(ch) })
            .collect()
    }

    /// Fills placeholders from `source` verbatim, without normalizing it.
    ///
    /// Characters left over in `source` are ignored.
    pub fn fill(&self, source: &str) -> Result<String, PhoneError> {
        let mut chars = source.chars();
        let mut out = String::with_capacity(self.0.len());
        for ch in self.0.chars() {
            if ch != PLACEHOLDER {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some(next) => out.push(next),
                None => {
                    return Err(PhoneError::SourceExhausted {
                        needed: self.placeholders(),
                        available: source.chars().count(),
                    })
                }
            }
        }
        Ok(out)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }
}

fn count_placeholders(raw: &str) -> usize {
    raw.chars().filter(|ch| *ch == PLACEHOLDER).count()
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Template {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Template {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Template> for String {
    fn from(value: Template) -> Self {
        value.0
    }
}
