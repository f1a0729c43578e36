//! WordPress block theme `theme.json`.
//!
//! The palette uses WordPress-facing names (Brand, Contrast, Tint, ...) that
//! differ from the internal role names; slugs are the kebab-case roles.

use serde::Serialize;
use theme_forge_core::{HexColor, Role, Theme, ThemeError};

pub const SCHEMA_URL: &str = "https://schemas.wp.org/trunk/theme.json";
pub const SCHEMA_VERSION: u32 = 3;

#[derive(Debug, Serialize)]
pub struct ThemeJson<'a> {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub version: u32,
    pub title: &'a str,
    pub settings: Settings<'a>,
}

#[derive(Debug, Serialize)]
pub struct Settings<'a> {
    pub color: ColorSettings<'a>,
}

#[derive(Debug, Serialize)]
pub struct ColorSettings<'a> {
    pub palette: Vec<PaletteEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PaletteEntry<'a> {
    pub name: &'static str,
    pub slug: &'static str,
    pub color: &'a HexColor,
}

/// WordPress display name of a role.
pub const fn display_name(role: Role) -> &'static str {
    match role {
        Role::Primary => "Brand",
        Role::PrimaryAccent => "Brand Accent",
        Role::PrimaryAlt => "Brand Alt",
        Role::PrimaryAltAccent => "Brand Alt Accent",
        Role::Main => "Contrast",
        Role::MainAccent => "Contrast Accent",
        Role::Base => "Base",
        Role::Secondary => "Base Accent",
        Role::Tertiary => "Tint",
        Role::BorderLight => "Border Base",
        Role::BorderDark => "Border Contrast",
    }
}

/// Builds the `theme.json` document for `theme`.
pub fn theme_json<'a>(theme: &'a Theme, title: &'a str) -> ThemeJson<'a> {
    let palette = theme
        .iter()
        .map(|(role, color)| PaletteEntry {
            name: display_name(role),
            slug: role.kebab(),
            color,
        })
        .collect();
    ThemeJson {
        schema: SCHEMA_URL,
        version: SCHEMA_VERSION,
        title,
        settings: Settings {
            color: ColorSettings { palette },
        },
    }
}

/// Renders `theme` as 2-space indented `theme.json` text.
pub fn to_wordpress(theme: &Theme, title: &str) -> Result<String, ThemeError> {
    Ok(serde_json::to_string_pretty(&theme_json(theme, title))?)
}
