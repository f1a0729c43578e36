//! RGB and HSL color types and the conversions between them.
//!
//! Conversions are pure functions over `f64` and follow the classic six-sector
//! HSL model. The pair is exact at 8-bit precision:
//! `hsl_to_rgb(rgb_to_hsl(c)) == c` for every `Rgb`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;
use crate::hex::parse_rgb;

/// 8-bit sRGB color.
///
/// Serializes as an uppercase hex string `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parses a strict 6-digit hex color like "#ff00aa" or "FF00AA".
    pub fn from_hex(hex: &str) -> Result<Rgb, ThemeError> {
        parse_rgb(hex)
    }

    /// Formats the color as `"#RRGGBB"`, uppercase and zero-padded.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Converts RGB to HSL.
///
/// When two channels share the maximum, the first of red, green, blue wins
/// the hue sector. Grays get hue and saturation 0.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: sector / 6.0 * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Converts HSL to RGB, rounding each channel to the nearest integer.
///
/// Hue outside [0, 360) wraps by one turn inside the ramp; saturation and
/// lightness are expected in [0, 100] and the output is clamped to 0..=255.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = c.h / 360.0;
    let s = c.s / 100.0;
    let l = c.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: quantize(r),
        g: quantize(g),
        b: quantize(b),
    }
}

/// Piecewise linear ramp mapping a hue offset to one channel between `p` and `q`.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn quantize(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}
