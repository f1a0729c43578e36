//! Error types for the theme-forge core.

use thiserror::Error;

/// Errors produced by theme operations.
///
/// The top-level entry points ([`crate::generate_theme`], [`crate::contrast_text`],
/// [`crate::is_valid_hex`]) never surface these; they exist for the typed
/// variants callers use when they need to explain a rejection.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color string could not be parsed as `#RRGGBB`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A 3-digit shorthand color passed validation but cannot be parsed to RGB.
    #[error("shorthand hex '{0}' is not supported, use the 6-digit form")]
    ShorthandHex(String),

    /// A role name did not match any of the theme roles.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// An export format name was not recognized.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A config or export document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ThemeError {
    fn from(e: serde_json::Error) -> Self {
        ThemeError::Serialization(e.to_string())
    }
}
