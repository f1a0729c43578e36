//! The closed set of theme roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A named slot in a [`crate::Theme`].
///
/// Declaration order is the serialization order of every export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Primary,
    PrimaryAccent,
    PrimaryAlt,
    PrimaryAltAccent,
    Main,
    MainAccent,
    Base,
    Secondary,
    Tertiary,
    BorderLight,
    BorderDark,
}

impl Role {
    /// All roles in theme order.
    pub const ALL: [Role; 11] = [
        Role::Primary,
        Role::PrimaryAccent,
        Role::PrimaryAlt,
        Role::PrimaryAltAccent,
        Role::Main,
        Role::MainAccent,
        Role::Base,
        Role::Secondary,
        Role::Tertiary,
        Role::BorderLight,
        Role::BorderDark,
    ];

    /// Position in [`Role::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// camelCase name used as JSON key and Tailwind color name.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::PrimaryAccent => "primaryAccent",
            Role::PrimaryAlt => "primaryAlt",
            Role::PrimaryAltAccent => "primaryAltAccent",
            Role::Main => "main",
            Role::MainAccent => "mainAccent",
            Role::Base => "base",
            Role::Secondary => "secondary",
            Role::Tertiary => "tertiary",
            Role::BorderLight => "borderLight",
            Role::BorderDark => "borderDark",
        }
    }

    /// kebab-case name, used for CSS variables and WordPress slugs.
    pub const fn kebab(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::PrimaryAccent => "primary-accent",
            Role::PrimaryAlt => "primary-alt",
            Role::PrimaryAltAccent => "primary-alt-accent",
            Role::Main => "main",
            Role::MainAccent => "main-accent",
            Role::Base => "base",
            Role::Secondary => "secondary",
            Role::Tertiary => "tertiary",
            Role::BorderLight => "border-light",
            Role::BorderDark => "border-dark",
        }
    }

    /// Start-case label for previews, e.g. "Primary Alt Accent".
    pub const fn label(self) -> &'static str {
        match self {
            Role::Primary => "Primary",
            Role::PrimaryAccent => "Primary Accent",
            Role::PrimaryAlt => "Primary Alt",
            Role::PrimaryAltAccent => "Primary Alt Accent",
            Role::Main => "Main",
            Role::MainAccent => "Main Accent",
            Role::Base => "Base",
            Role::Secondary => "Secondary",
            Role::Tertiary => "Tertiary",
            Role::BorderLight => "Border Light",
            Role::BorderDark => "Border Dark",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the camelCase or the kebab-case name.
impl FromStr for Role {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.name() == s || r.kebab() == s)
            .ok_or_else(|| ThemeError::UnknownRole(s.to_owned()))
    }
}
