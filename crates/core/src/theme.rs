//! Role-based themes derived from a single primary color.
//!
//! The pipeline is: validate, normalize, parse to RGB, convert to HSL, then
//! resolve each role from [`crate::rules::RULES`] and convert back to hex.

use serde::Serialize;
use tracing::debug;

use crate::color::Hsl;
use crate::error::ThemeError;
use crate::hex::{is_valid_hex, HexColor};
use crate::role::Role;
use crate::rules::{derivation, Derivation};

/// A complete palette: one color per [`Role`].
///
/// Field order is role order; serializes as a JSON object keyed by the
/// camelCase role names in that order. Only [`Theme::derive`] builds one, so
/// every role always follows from `primary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: HexColor,
    pub primary_accent: HexColor,
    pub primary_alt: HexColor,
    pub primary_alt_accent: HexColor,
    pub main: HexColor,
    pub main_accent: HexColor,
    pub base: HexColor,
    pub secondary: HexColor,
    pub tertiary: HexColor,
    pub border_light: HexColor,
    pub border_dark: HexColor,
}

impl Theme {
    /// Derives a theme from `primary`, explaining why the input was rejected.
    ///
    /// Returns `ThemeError::InvalidColor` when the input fails
    /// [`is_valid_hex`], and `ThemeError::ShorthandHex` for 3-digit input,
    /// which validates but has no 6-digit parse.
    pub fn derive(primary: &str) -> Result<Theme, ThemeError> {
        if !is_valid_hex(primary) {
            return Err(ThemeError::InvalidColor(format!(
                "'{primary}' is not a hex color"
            )));
        }
        let primary = HexColor::parse(primary)?;
        let base = primary.to_rgb().to_hsl();
        let resolve = |role: Role| resolve_role(role, &primary, base);

        Ok(Theme {
            primary: resolve(Role::Primary),
            primary_accent: resolve(Role::PrimaryAccent),
            primary_alt: resolve(Role::PrimaryAlt),
            primary_alt_accent: resolve(Role::PrimaryAltAccent),
            main: resolve(Role::Main),
            main_accent: resolve(Role::MainAccent),
            base: resolve(Role::Base),
            secondary: resolve(Role::Secondary),
            tertiary: resolve(Role::Tertiary),
            border_light: resolve(Role::BorderLight),
            border_dark: resolve(Role::BorderDark),
        })
    }

    pub fn get(&self, role: Role) -> &HexColor {
        match role {
            Role::Primary => &self.primary,
            Role::PrimaryAccent => &self.primary_accent,
            Role::PrimaryAlt => &self.primary_alt,
            Role::PrimaryAltAccent => &self.primary_alt_accent,
            Role::Main => &self.main,
            Role::MainAccent => &self.main_accent,
            Role::Base => &self.base,
            Role::Secondary => &self.secondary,
            Role::Tertiary => &self.tertiary,
            Role::BorderLight => &self.border_light,
            Role::BorderDark => &self.border_dark,
        }
    }

    /// Iterates `(role, color)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &HexColor)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Number of roles. Always 11.
    pub fn len(&self) -> usize {
        Role::ALL.len()
    }

    /// Always false: a `Theme` is never partially built.
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn resolve_role(role: Role, primary: &HexColor, base: Hsl) -> HexColor {
    match derivation(role) {
        Derivation::Identity => primary.clone(),
        Derivation::Constant(rgb) => HexColor::from_rgb(rgb),
        Derivation::Derived(rule) => HexColor::from_rgb(rule.apply(base).to_rgb()),
    }
}

/// Generates a theme from a primary hex color.
///
/// Returns `None` (the empty theme) for any input [`Theme::derive`] rejects.
/// Never panics.
pub fn generate_theme(primary: &str) -> Option<Theme> {
    match Theme::derive(primary) {
        Ok(theme) => Some(theme),
        Err(e) => {
            debug!(input = primary, error = %e, "primary color rejected, theme is empty");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hsl;

    fn hexes(theme: &Theme) -> Vec<&str> {
        theme.iter().map(|(_, c)| c.as_str()).collect()
    }

    #[test]
    fn invalid_input_yields_empty_theme() {
        for bad in ["notacolor", "#12", "", "#12345G", "#1234567"] {
            assert!(generate_theme(bad).is_none(), "accepted {bad:?}");
        }
    }

    #[test]
    fn shorthand_validates_but_yields_empty_theme() {
        assert!(is_valid_hex("#5AB"));
        assert!(generate_theme("#5AB").is_none());
        assert!(matches!(Theme::derive("#5AB"), Err(ThemeError::ShorthandHex(_))));
    }

    #[test]
    fn derive_reports_invalid_color() {
        assert!(matches!(Theme::derive("notacolor"), Err(ThemeError::InvalidColor(_))));
    }

    #[test]
    fn default_primary_matches_reference_palette() {
        let theme = generate_theme("#5344F4").unwrap();
        assert_eq!(
            hexes(&theme),
            [
                "#5344F4", "#DAD7FA", "#537EFE", "#291BB7", "#2B293D", "#D0CEE9", "#FFFFFF",
                "#5A5498", "#DFDEF3", "#DFDEED", "#3E2F89",
            ]
        );
    }

    #[test]
    fn roles_come_out_in_fixed_order() {
        let theme = generate_theme("#5344F4").unwrap();
        let roles: Vec<Role> = theme.iter().map(|(r, _)| r).collect();
        assert_eq!(roles, Role::ALL);
        assert_eq!(theme.len(), 11);
        assert!(!theme.is_empty());
    }

    #[test]
    fn primary_is_the_normalized_input_not_a_round_trip() {
        let theme = generate_theme("5344f4").unwrap();
        assert_eq!(theme.primary.as_str(), "#5344f4");
        assert_eq!(theme.primary_accent.as_str(), "#DAD7FA");
    }

    #[test]
    fn base_is_always_white() {
        for input in ["#000000", "#FFFFFF", "#5344F4", "#FF0000", "123abc"] {
            assert_eq!(generate_theme(input).unwrap().base.as_str(), "#FFFFFF");
        }
    }

    #[test]
    fn gray_input_resolves_every_role() {
        let base = rgb_to_hsl(crate::Rgb { r: 0x80, g: 0x80, b: 0x80 });
        assert_eq!(base.h, 0.0);
        assert_eq!(base.s, 0.0);

        let theme = generate_theme("#808080").unwrap();
        assert_eq!(
            hexes(&theme),
            [
                "#808080", "#D2C7C7", "#988189", "#5C3E3E", "#282424", "#C3BDBD", "#FFFFFF",
                "#705C5C", "#E7E4E4", "#CFCACA", "#4A3837",
            ]
        );
    }

    #[test]
    fn pure_red_shifts_alt_toward_magenta() {
        let theme = generate_theme("#FF0000").unwrap();
        assert_eq!(theme.primary_alt.as_str(), "#FF1A66");
        assert_eq!(theme.border_dark.as_str(), "#662019");
    }

    #[test]
    fn extreme_lightness_inputs_resolve() {
        let black = generate_theme("#000000").unwrap();
        assert_eq!(black.main.as_str(), "#282424");
        assert_eq!(black.tertiary.as_str(), "#E7E4E4");

        let white = generate_theme("#FFFFFF").unwrap();
        assert_eq!(white.tertiary.as_str(), "#FAFAFA");
        assert_eq!(white.main.as_str(), "#363030");
    }

    #[test]
    fn get_agrees_with_iter() {
        let theme = generate_theme("#0a9396").unwrap();
        for (role, color) in theme.iter() {
            assert_eq!(theme.get(role), color);
        }
    }

    #[test]
    fn serializes_as_ordered_camel_case_object() {
        let theme = generate_theme("#5344F4").unwrap();
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.starts_with("{\"primary\":\"#5344F4\",\"primaryAccent\":\"#DAD7FA\""));
        let keys: Vec<usize> = Role::ALL
            .iter()
            .map(|r| json.find(&format!("\"{}\":", r.name())).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys out of order in {json}");
    }

    #[test]
    fn serialized_primary_rederives_the_same_theme() {
        let theme = generate_theme("#94d2bd").unwrap();
        let value = serde_json::to_value(&theme).unwrap();
        let primary = value["primary"].as_str().unwrap();
        assert_eq!(Theme::derive(primary).unwrap(), theme);
        for (role, color) in theme.iter() {
            assert_eq!(value[role.name()], color.as_str());
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generation_is_idempotent(s in "#[0-9a-fA-F]{6}") {
                prop_assert_eq!(generate_theme(&s), generate_theme(&s));
            }

            #[test]
            fn every_valid_six_digit_input_yields_a_full_theme(s in "#?[0-9a-fA-F]{6}") {
                let theme = generate_theme(&s).unwrap();
                prop_assert_eq!(theme.iter().count(), 11);
                prop_assert!(theme.base == "#FFFFFF");
            }

            #[test]
            fn arbitrary_strings_never_panic(s in ".*") {
                let _ = generate_theme(&s);
            }
        }
    }
}
