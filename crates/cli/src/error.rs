//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: theme error (unknown format or role)
//! - 11: I/O error (config read, export write)
//! - 12: input error (invalid or shorthand color)
//! - 13: serialization error

use std::fmt;

use theme_forge_core::ThemeError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A theme-level error (unknown format, unknown role).
    Theme(ThemeError),
    /// An I/O error (config file, export file).
    Io(String),
    /// A user input error (color that does not validate or parse).
    Input(String),
    /// A serialization error (config parse or JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Theme(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Theme(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ThemeError> for CliError {
    fn from(e: ThemeError) -> Self {
        match e {
            ThemeError::Io(msg) => CliError::Io(msg),
            ThemeError::Serialization(msg) => CliError::Serialization(msg),
            e @ (ThemeError::InvalidColor(_) | ThemeError::ShorthandHex(_)) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Theme(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_error_exit_code_is_10() {
        let err = CliError::Theme(ThemeError::UnknownFormat("yaml".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        assert_eq!(CliError::Io("write failed".into()).exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad color".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn from_theme_error_io_routes_to_cli_io() {
        let cli_err = CliError::from(ThemeError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_theme_error_color_routes_to_input() {
        let invalid = CliError::from(ThemeError::InvalidColor("zz".into()));
        let shorthand = CliError::from(ThemeError::ShorthandHex("#abc".into()));
        assert_eq!(invalid.exit_code(), 12);
        assert_eq!(shorthand.exit_code(), 12);
        assert!(shorthand.to_string().contains("#abc"));
    }

    #[test]
    fn from_theme_error_unknown_format_routes_to_theme() {
        let cli_err = CliError::from(ThemeError::UnknownFormat("xyz".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("xyz"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
