use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone number has {found} digits, at least 10 are required")]
    TooFewDigits { found: usize },
    #[error("template {template:?} has {placeholders} placeholders, expected 10")]
    InvalidTemplate {
        template: String,
        placeholders: usize,
    },
    #[error("template needs {needed} characters but input has {available}")]
    SourceExhausted { needed: usize, available: usize },
}
