pub mod error;
pub mod format;
pub mod number;
pub mod template;

pub use error::PhoneError;
pub use format::{format, format_with, FormatOptions, Formatter};
pub use number::{normalize, CanonicalNumber, CANONICAL_LEN};
pub use template::{Template, DEFAULT_TEMPLATE, PLACEHOLDER, PLACEHOLDER_COUNT};
