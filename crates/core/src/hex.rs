//! Hex color parsing and validation.
//!
//! Two acceptance levels coexist: [`is_valid_hex`] accepts both the 3-digit
//! shorthand and the 6-digit form, while [`parse_rgb`] only understands
//! `#RRGGBB`. Theme generation validates with the former and parses with the
//! latter, so shorthand input is rejected there with
//! [`ThemeError::ShorthandHex`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Rgb;
use crate::error::ThemeError;

/// Returns true if `input` (after trimming) is 3 or 6 hex digits with an
/// optional leading `#`. Case insensitive.
pub fn is_valid_hex(input: &str) -> bool {
    let digits = strip_hash(input.trim());
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Trims `input` and prefixes `#` if absent.
///
/// Shorthand is not expanded and letter case is preserved, so the result of a
/// valid input is only guaranteed to be parseable when it has 6 digits.
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        trimmed.to_owned()
    } else {
        format!("#{trimmed}")
    }
}

/// Parses a strict `#RRGGBB` / `RRGGBB` string (case insensitive) to RGB.
///
/// Returns `ThemeError::ShorthandHex` for 3-digit input that [`is_valid_hex`]
/// would accept, and `ThemeError::InvalidColor` for anything else that is
/// not exactly 6 hex digits.
pub fn parse_rgb(hex: &str) -> Result<Rgb, ThemeError> {
    let digits = strip_hash(hex);
    if digits.len() == 3 && is_valid_hex(hex) {
        return Err(ThemeError::ShorthandHex(hex.to_owned()));
    }
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::InvalidColor(format!(
            "expected 6 hex digits, got '{hex}'"
        )));
    }
    let channel = |range: std::ops::Range<usize>, name: &str| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ThemeError::InvalidColor(format!("invalid {name} component: {e}")))
    };
    Ok(Rgb {
        r: channel(0..2, "red")?,
        g: channel(2..4, "green")?,
        b: channel(4..6, "blue")?,
    })
}

fn strip_hash(s: &str) -> &str {
    s.strip_prefix('#').unwrap_or(s)
}

/// A validated `#`-prefixed 6-digit hex color.
///
/// Keeps the text as it was supplied (so a user's `#5344f4` stays lowercase)
/// alongside the parsed channels. Equality and hashing go through the
/// channels, which makes comparison case insensitive.
#[derive(Debug, Clone)]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    /// Normalizes and strictly parses `input`.
    pub fn parse(input: &str) -> Result<Self, ThemeError> {
        let text = normalize_hex(input);
        let rgb = parse_rgb(&text)?;
        Ok(Self { text, rgb })
    }

    /// Builds the canonical uppercase form of `rgb`.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            text: rgb.to_hex(),
            rgb,
        }
    }

    /// Pairs `text` with channels the caller has already derived from it.
    pub(crate) fn with_text(text: String, rgb: Rgb) -> Self {
        debug_assert_eq!(parse_rgb(&text).ok(), Some(rgb));
        Self { text, rgb }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn to_rgb(&self) -> Rgb {
        self.rgb
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for HexColor {}

impl Hash for HexColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
    }
}

/// Compares channels, like `HexColor == HexColor`; unparseable text is never equal.
impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        matches!(parse_rgb(other.trim()), Ok(rgb) if rgb == self.rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}
