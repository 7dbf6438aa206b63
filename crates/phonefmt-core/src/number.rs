use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PhoneError;

/// Number of digits in a canonical number: 3-digit area code plus 7-digit subscriber.
pub const CANONICAL_LEN: usize = 10;

const TRUNK_PREFIX: char = '1';

/// A domestic phone number reduced to exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    /// Strips formatting from `raw` and collapses any country or trunk prefix.
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        let mut digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();

        if digits.len() == CANONICAL_LEN + 1 && digits.starts_with(TRUNK_PREFIX) {
            digits.remove(0);
            debug!(prefix = %TRUNK_PREFIX, "dropped trunk prefix");
        }

        if digits.len() < CANONICAL_LEN {
            return Err(PhoneError::TooFewDigits {
                found: digits.len(),
            });
        }

        if digits.len() > CANONICAL_LEN {
            let cut = digits.len() - CANONICAL_LEN;
            debug!(prefix = %&digits[..cut], "dropped country prefix");
            digits.drain(..cut);
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CanonicalNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CanonicalNumber> for String {
    fn from(value: CanonicalNumber) -> Self {
        value.0
    }
}

/// Normalizes `raw` into a canonical 10-digit string.
///
/// `None` passes through as `None`. Input with fewer than ten digits once
/// punctuation is removed fails with [`PhoneError::TooFewDigits`].
pub fn normalize(raw: Option<&str>) -> Result<Option<String>, PhoneError> {
    match raw {
        Some(raw) => Ok(Some(CanonicalNumber::parse(raw)?.0)),
        None => Ok(None),
    }
}
