//! `tailwind.config.js` literal.

use theme_forge_core::Theme;

/// Renders `theme` as a Tailwind config extending `theme.colors`.
pub fn to_tailwind(theme: &Theme) -> String {
    let colors: String = theme
        .iter()
        .map(|(role, color)| format!("\n        {}: '{color}',", role.name()))
        .collect();
    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{{colors}\n      }},\n    }},\n  }},\n  plugins: [],\n}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_forge_core::generate_theme;

    #[test]
    fn default_theme_tailwind() {
        let theme = generate_theme("#5344F4").unwrap();
        let expected = "\
module.exports = {
  theme: {
    extend: {
      colors: {
        primary: '#5344F4',
        primaryAccent: '#DAD7FA',
        primaryAlt: '#537EFE',
        primaryAltAccent: '#291BB7',
        main: '#2B293D',
        mainAccent: '#D0CEE9',
        base: '#FFFFFF',
        secondary: '#5A5498',
        tertiary: '#DFDEF3',
        borderLight: '#DFDEED',
        borderDark: '#3E2F89',
      },
    },
  },
  plugins: [],
}";
        assert_eq!(to_tailwind(&theme), expected);
    }
}
