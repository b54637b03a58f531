//! Board file generation (serialization).
//!
//! This module renders a `BoardState` into the line-oriented board format,
//! with atomic file writes for safety.

use crate::constants::ITEM_PREFIX;
use crate::models::{
    validate_category_key, validate_image_location, validate_text, BoardState, ROOT_KEY,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes every non-root category of `board` to `path`.
///
/// The file is replaced, never appended to. This performs an atomic write
/// using a temp file + rename pattern so a failed export leaves any
/// previous file intact.
///
/// # Errors
///
/// Returns errors for:
/// - Entries the loader could not read back (see [`check_writable`]);
///   nothing is written in that case
/// - File I/O failures
/// - Permission issues
/// - Atomic rename failures
pub fn save_board(board: &BoardState, path: &Path) -> Result<()> {
    check_writable(board)?;
    let content = generate_board_text(board);
    atomic_write(path, &content)?;
    info!(
        "Exported {} categories to {}",
        board.category_count().saturating_sub(1),
        path.display()
    );
    Ok(())
}

/// Renders the board format for every registered category except root.
pub fn generate_board_text(board: &BoardState) -> String {
    let mut output = String::new();

    for (key, category) in board.categories().filter(|(key, _)| *key != ROOT_KEY) {
        output.push_str(&format!("{key} {}\n", category.name()));

        for (image, pictogram) in category.pictograms() {
            output.push_str(&format!("{ITEM_PREFIX}{image} {}\n", pictogram.text()));
        }
    }

    output
}

/// Checks that every exported entry survives a write and reload.
///
/// Header keys must be valid category keys, item locations must contain no
/// whitespace, and no name or text may contain a line break.
pub fn check_writable(board: &BoardState) -> Result<()> {
    for (key, category) in board.categories().filter(|(key, _)| *key != ROOT_KEY) {
        validate_category_key(key)?;
        validate_text(category.name())
            .with_context(|| format!("Category '{key}' cannot be exported"))?;

        for (image, pictogram) in category.pictograms() {
            validate_image_location(image)
                .and_then(|()| validate_text(pictogram.text()))
                .with_context(|| {
                    format!("Pictogram '{image}' in category '{key}' cannot be exported")
                })?;
        }
    }

    Ok(())
}

/// Writes content to a sibling temp file, then renames it over `path`.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    if let Err(err) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(err)
            .with_context(|| format!("Failed to rename temporary file to: {}", path.display()));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_else(|| "board".into());
    name.push(".tmp");
    path.with_file_name(name)
}
