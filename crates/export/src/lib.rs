#![deny(unsafe_code)]
//! Format registry: maps export format names to theme serializers.
//!
//! Every serializer projects a [`Theme`] in role order and never alters its
//! colors. The CLI dispatches through [`Format`] so format names live in one
//! place.

pub mod css;
pub mod file;
pub mod json;
pub mod tailwind;
pub mod wordpress;

use std::fmt;

use theme_forge_core::{Theme, ThemeError};
use tracing::debug;

/// All available format names.
const FORMAT_NAMES: &[&str] = &["json", "css", "tailwind", "wordpress"];

/// Export formats a theme can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty JSON object, role name to hex.
    Json,
    /// CSS custom properties in a `:root` block.
    Css,
    /// `tailwind.config.js` literal extending the color set.
    Tailwind,
    /// WordPress block theme `theme.json`.
    WordPress,
}

impl Format {
    /// Looks a format up by name.
    ///
    /// Returns `ThemeError::UnknownFormat` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ThemeError> {
        let format = match name {
            "json" => Format::Json,
            "css" => Format::Css,
            "tailwind" => Format::Tailwind,
            "wordpress" => Format::WordPress,
            _ => return Err(ThemeError::UnknownFormat(name.to_string())),
        };
        debug!(name, ?format, "resolved export format");
        Ok(format)
    }

    /// Returns a slice of all recognized format names.
    pub fn list_formats() -> &'static [&'static str] {
        FORMAT_NAMES
    }

    pub const fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Css => "css",
            Format::Tailwind => "tailwind",
            Format::WordPress => "wordpress",
        }
    }

    /// File extension (without dot) for downloads in this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Json | Format::WordPress => "json",
            Format::Css => "css",
            Format::Tailwind => "js",
        }
    }

    /// Renders `theme` in this format. `title` is only used by WordPress.
    pub fn render(self, theme: &Theme, title: &str) -> Result<String, ThemeError> {
        match self {
            Format::Json => json::to_json(theme),
            Format::Css => Ok(css::to_css(theme)),
            Format::Tailwind => Ok(tailwind::to_tailwind(theme)),
            Format::WordPress => wordpress::to_wordpress(theme, title),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
