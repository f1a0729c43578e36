#![deny(unsafe_code)]
//! Core color engine for theme-forge.
//!
//! Derives an 11-role [`Theme`] from one primary hex color. Provides the hex
//! parser/validator ([`hex`]), RGB/HSL conversions ([`color`]), the fixed
//! role rule table ([`rules`]), the YIQ text-contrast evaluator
//! ([`contrast`]), a seeded random primary picker ([`prng`]) and the
//! [`ThemeSpec`] config record. Everything here is pure and synchronous.

pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod hex;
pub mod prng;
pub mod role;
pub mod rules;
pub mod theme;

pub use color::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
pub use config::ThemeSpec;
pub use contrast::{contrast_text, TextColor};
pub use error::ThemeError;
pub use hex::{is_valid_hex, normalize_hex, parse_rgb, HexColor};
pub use prng::{random_primary, Xorshift64};
pub use role::Role;
pub use theme::{generate_theme, Theme};
