//! The fixed per-role HSL transformation table.
//!
//! Each derived role shifts the base hue and pulls saturation and lightness
//! through an offset followed by a clamp into a closed sub-range of [0, 100].
//! The table is data: nothing here varies at runtime.

use crate::color::{Hsl, Rgb};
use crate::role::Role;

/// Additive hue shift in degrees, wrapped into [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueShift(pub f64);

impl HueShift {
    pub const NONE: HueShift = HueShift(0.0);

    /// Applies the shift to a hue already in [0, 360).
    ///
    /// Negative shifts add a full turn before the modulo so the operand stays
    /// positive; the two branches keep the exact float evaluation order of
    /// the reference palettes.
    pub fn apply(self, h: f64) -> f64 {
        if self.0 < 0.0 {
            (h + self.0 + 360.0) % 360.0
        } else {
            (h + self.0) % 360.0
        }
    }
}

/// Offset then clamp into `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjust {
    pub offset: f64,
    pub min: f64,
    pub max: f64,
}

impl Adjust {
    pub const fn new(offset: f64, min: f64, max: f64) -> Self {
        Self { offset, min, max }
    }

    pub fn apply(self, value: f64) -> f64 {
        (value + self.offset).clamp(self.min, self.max)
    }
}

/// A complete HSL transformation for one role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub hue: HueShift,
    pub saturation: Adjust,
    pub lightness: Adjust,
}

impl Rule {
    pub fn apply(&self, base: Hsl) -> Hsl {
        Hsl {
            h: self.hue.apply(base.h),
            s: self.saturation.apply(base.s),
            l: self.lightness.apply(base.l),
        }
    }
}

/// How a role obtains its color from the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derivation {
    /// The normalized input itself, never re-derived through HSL.
    Identity,
    /// A fixed color independent of the input.
    Constant(Rgb),
    /// An HSL transformation of the base color.
    Derived(Rule),
}

const fn derived(hue: f64, saturation: Adjust, lightness: Adjust) -> Derivation {
    Derivation::Derived(Rule {
        hue: HueShift(hue),
        saturation,
        lightness,
    })
}

/// Derivation of every role, in role order.
pub const RULES: [(Role, Derivation); 11] = [
    (Role::Primary, Derivation::Identity),
    // Tint.
    (
        Role::PrimaryAccent,
        derived(0.0, Adjust::new(-10.0, 10.0, 100.0), Adjust::new(30.0, 0.0, 95.0)),
    ),
    // Shift toward warmer tones.
    (
        Role::PrimaryAlt,
        derived(-20.0, Adjust::new(10.0, 0.0, 100.0), Adjust::new(5.0, 0.0, 85.0)),
    ),
    // Shade.
    (
        Role::PrimaryAltAccent,
        derived(0.0, Adjust::new(-15.0, 20.0, 100.0), Adjust::new(-20.0, 25.0, 100.0)),
    ),
    (
        Role::Main,
        derived(0.0, Adjust::new(-70.0, 5.0, 100.0), Adjust::new(-40.0, 15.0, 20.0)),
    ),
    (
        Role::MainAccent,
        derived(0.0, Adjust::new(-50.0, 5.0, 100.0), Adjust::new(25.0, 0.0, 90.0)),
    ),
    (Role::Base, Derivation::Constant(Rgb::WHITE)),
    (
        Role::Secondary,
        derived(0.0, Adjust::new(-60.0, 10.0, 100.0), Adjust::new(-15.0, 40.0, 100.0)),
    ),
    (
        Role::Tertiary,
        derived(0.0, Adjust::new(-40.0, 5.0, 100.0), Adjust::new(30.0, 90.0, 98.0)),
    ),
    (
        Role::BorderLight,
        derived(0.0, Adjust::new(-60.0, 5.0, 100.0), Adjust::new(30.0, 0.0, 90.0)),
    ),
    (
        Role::BorderDark,
        derived(5.0, Adjust::new(-40.0, 15.0, 100.0), Adjust::new(-25.0, 25.0, 100.0)),
    ),
];

/// Looks up the derivation for `role`.
pub fn derivation(role: Role) -> Derivation {
    RULES[role.index()].1
}
