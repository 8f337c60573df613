//! Clipboard helper for copying the exported rows
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use crate::table::export::{self, ExportRecord};
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Render `records` as CSV and place the text on the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_csv(records: &[ExportRecord]) -> Result<()> {
    let text = export::to_csv_string(records).context("Failed to render CSV")?;
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
