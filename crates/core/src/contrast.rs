//! Readable text color selection via YIQ luminance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::hex::parse_rgb;

/// Luminance at or above which black text reads better than white.
pub const YIQ_THRESHOLD: f64 = 128.0;

/// Text color to place on top of a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// YIQ luminance in [0, 255]: `(299 r + 587 g + 114 b) / 1000`.
pub fn yiq(c: Rgb) -> f64 {
    let weighted = 299 * u32::from(c.r) + 587 * u32::from(c.g) + 114 * u32::from(c.b);
    f64::from(weighted) / 1000.0
}

/// Picks black or white text for the background `rgb`.
pub fn text_color_for(rgb: Rgb) -> TextColor {
    if yiq(rgb) >= YIQ_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Picks black or white text for a hex background.
///
/// Anything the strict 6-digit parser rejects falls back to black.
pub fn contrast_text(hex: &str) -> TextColor {
    parse_rgb(hex).map_or(TextColor::Black, text_color_for)
}
