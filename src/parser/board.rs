//! Board file parsing.
//!
//! Board files list every sub-board as a header line followed by its
//! pictograms:
//!
//! ```text
//! img/food/plate.png Food
//! >img/food/apple.png Apple
//! >img/food/bread.png Bread
//! img/clothing/hanger.png Clothing
//! >img/clothing/hat.png Hat
//! ```
//!
//! The first space on each line separates the image location from its text.
//! Headers register a category and place its opening pictogram on the root
//! board; `>` lines add pictograms to the most recent category.

use crate::constants::{APP_BINARY_NAME, ITEM_PREFIX};
use crate::models::{BoardState, TriggerSet};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Parses a board file into a fresh `BoardState` opened at root.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or not a regular file
/// - I/O failures while reading
/// - Malformed lines (see [`parse_board_str`])
pub fn parse_board_file(path: &Path, triggers: TriggerSet) -> Result<BoardState> {
    if !path.exists() {
        anyhow::bail!(
            "Board file not found: {}\n\n\
             Please check the file path and try again.\n\
             To start a new board, run: {} add --board {} --image <LOC> --text <TEXT>",
            path.display(),
            APP_BINARY_NAME,
            path.display()
        );
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file: {}", path.display()))?;

    parse_board_str(&content, triggers)
        .with_context(|| format!("Failed to parse board file: {}", path.display()))
}

/// Parses board content from a string.
///
/// Blank lines are skipped. A pictogram line before the first header, or a
/// line with no space separator, is an error naming the 1-based line number.
pub fn parse_board_str(content: &str, triggers: TriggerSet) -> Result<BoardState> {
    let mut board = BoardState::new(triggers);
    let mut open_category: Option<String> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        if line.trim().is_empty() {
            continue;
        }

        if let Some(item) = line.strip_prefix(ITEM_PREFIX) {
            let key = open_category.as_deref().ok_or_else(|| {
                anyhow::anyhow!("Line {line_num}: pictogram line appears before any category header")
            })?;
            let (image, text) = split_entry(item, line_num)?;

            let category = board
                .category_mut(key)
                .ok_or_else(|| anyhow::anyhow!("Line {line_num}: category '{key}' is not registered"))?;
            category.add_item(image, text);
        } else {
            let (image, text) = split_entry(line, line_num)?;
            let registration = board
                .add_category(image, text)
                .with_context(|| format!("Line {line_num}: invalid category header"))?;
            debug!("Line {}: category '{}' {:?}", line_num, image, registration);
            open_category = Some(image.to_string());
        }
    }

    Ok(board)
}

/// Splits `<image> <text>` at the first space.
fn split_entry(line: &str, line_num: usize) -> Result<(&str, &str)> {
    let (image, text) = line.split_once(' ').ok_or_else(|| {
        anyhow::anyhow!("Line {line_num}: expected '<image> <text>', got '{line}'")
    })?;

    if image.is_empty() {
        anyhow::bail!("Line {line_num}: missing image location");
    }

    Ok((image, text))
}
