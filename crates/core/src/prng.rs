//! Deterministic PRNG for picking random primary colors.
//!
//! Xorshift64 keeps the "random color" feature reproducible: the same seed
//! always suggests the same sequence of primaries on every platform.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::hex::HexColor;

/// Xorshift64 deterministic PRNG with shifts (13, 7, 17).
///
/// Seed 0 is replaced with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

/// Exclusive upper bound of random primaries; `#ffffff` itself is never drawn.
const COLOR_SPACE: u64 = 0xFF_FFFF;

/// Draws a random primary in `#000000..=#fffffe`, formatted lowercase.
pub fn random_primary(rng: &mut Xorshift64) -> HexColor {
    let n = rng.next_u64() % COLOR_SPACE;
    let rgb = Rgb {
        r: (n >> 16) as u8,
        g: (n >> 8) as u8,
        b: n as u8,
    };
    HexColor::with_text(format!("#{n:06x}"), rgb)
}
