//! Writing exports to disk.

use std::path::{Path, PathBuf};

use theme_forge_core::ThemeError;
use tracing::info;

use crate::Format;

/// File name a download of `title` in `format` gets.
///
/// The title is lowercased and every character outside `[a-z0-9]` becomes
/// `-`, so "Custom Theme" in WordPress format is `custom-theme.json`.
pub fn download_name(title: &str, format: Format) -> String {
    let stem: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{stem}.{}", format.extension())
}

/// Resolves where an export goes: `path` itself, or the download name inside
/// it when `path` is an existing directory.
pub fn resolve_output(path: &Path, title: &str, format: Format) -> PathBuf {
    if path.is_dir() {
        path.join(download_name(title, format))
    } else {
        path.to_path_buf()
    }
}

/// Writes rendered export text to `path`.
///
/// Returns `ThemeError::Io` on write failure.
pub fn write_export(path: &Path, contents: &str) -> Result<(), ThemeError> {
    std::fs::write(path, contents)
        .map_err(|e| ThemeError::Io(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(())
}
