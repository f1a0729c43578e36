//! Reproducible description of a theme to generate.
//!
//! A [`ThemeSpec`] is what the CLI loads from `--config`: the theme title
//! used by exports and the primary color the palette is derived from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::Theme;

/// Default theme title, as shown in exports.
pub const DEFAULT_TITLE: &str = "Custom Theme";

/// Default primary color.
pub const DEFAULT_PRIMARY: &str = "#5344F4";

/// Title and primary color of a theme. Missing fields take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeSpec {
    pub title: String,
    pub primary: String,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            primary: DEFAULT_PRIMARY.to_owned(),
        }
    }
}

impl ThemeSpec {
    pub fn new(title: &str, primary: &str) -> Self {
        Self {
            title: title.to_owned(),
            primary: primary.to_owned(),
        }
    }

    /// Parses a spec from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a spec file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ThemeError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Derives the theme for this spec's primary color.
    pub fn theme(&self) -> Result<Theme, ThemeError> {
        Theme::derive(&self.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_matches_initial_values() {
        let s = ThemeSpec::default();
        assert_eq!(s.title, "Custom Theme");
        assert_eq!(s.primary, "#5344F4");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let s = ThemeSpec::from_json(r##"{"primary": "#0a9396"}"##).unwrap();
        assert_eq!(s.title, DEFAULT_TITLE);
        assert_eq!(s.primary, "#0a9396");

        let empty = ThemeSpec::from_json("{}").unwrap();
        assert_eq!(empty, ThemeSpec::default());
    }

    #[test]
    fn json_round_trip() {
        let original = ThemeSpec::new("Ocean", "#005f73");
        let json = serde_json::to_string_pretty(&original).unwrap();
        assert_eq!(ThemeSpec::from_json(&json).unwrap(), original);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            ThemeSpec::from_json("{title"),
            Err(ThemeError::Serialization(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "Fire", "primary": "cc0000"}}"#).unwrap();
        let s = ThemeSpec::load(file.path()).unwrap();
        assert_eq!(s, ThemeSpec::new("Fire", "cc0000"));
        assert_eq!(s.theme().unwrap().primary.as_str(), "#cc0000");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ThemeSpec::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ThemeError::Io(_))));
    }

    #[test]
    fn theme_propagates_invalid_primary() {
        let s = ThemeSpec::new("Broken", "#12");
        assert!(s.theme().is_err());
    }
}
