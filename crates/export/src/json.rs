//! Generic JSON object, role name to hex.

use theme_forge_core::{Theme, ThemeError};

/// Renders `theme` as a 2-space indented JSON object in role order.
pub fn to_json(theme: &Theme) -> Result<String, ThemeError> {
    Ok(serde_json::to_string_pretty(theme)?)
}
