//! CSS custom properties.

use theme_forge_core::Theme;

/// Renders `theme` as `--color-<role>` variables inside a `:root` block.
pub fn to_css(theme: &Theme) -> String {
    let body: String = theme
        .iter()
        .map(|(role, color)| format!("  --color-{}: {color};\n", role.kebab()))
        .collect();
    format!(":root {{\n{body}}}")
}
