//! Error types for wordstyle-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported when a style property is rejected
///
/// Lenient configuration swallows these; they only reach the caller
/// through the strict entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Configuration key with no matching property
    #[error("Unknown style property: {0}")]
    UnknownKey(String),

    /// Value of the wrong kind for a property
    #[error("Invalid value for '{key}': expected {expected}, got {actual}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        actual: String,
    },

    /// Width unit outside auto/pct/dxa
    #[error("Invalid width unit: {0}")]
    InvalidUnit(String),

    /// Unknown table alignment
    #[error("Invalid table alignment: {0}")]
    InvalidAlignment(String),

    /// Unknown shading pattern
    #[error("Invalid shading pattern: {0}")]
    InvalidPattern(String),
}

impl Error {
    /// Create an "invalid value" error for a configuration key
    pub fn invalid_value<K: Into<String>>(key: K, expected: &'static str, actual: String) -> Self {
        Error::InvalidValue {
            key: key.into(),
            expected,
            actual,
        }
    }
}
