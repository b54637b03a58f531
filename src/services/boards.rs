//! Board file I/O service.
//!
//! This module centralizes all board file operations, providing a consistent
//! interface for loading and saving board files.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::{
    models::{BoardState, TriggerSet},
    parser,
};

/// Service for managing board file I/O operations.
///
/// This service centralizes all board file operations to ensure consistent
/// handling of file paths and error messages.
pub struct BoardService;

impl BoardService {
    /// Loads a board from a board file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the board file to load
    /// * `triggers` - Category triggers to use for pictograms added later
    ///
    /// # Returns
    ///
    /// * `Ok(BoardState)` - Successfully parsed board, opened at root
    /// * `Err(...)` - File not found, parse error, or I/O error
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aacboard::models::TriggerSet;
    /// use aacboard::services::BoardService;
    ///
    /// let board = BoardService::load(Path::new("board.txt"), TriggerSet::default())?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path, triggers: TriggerSet) -> Result<BoardState> {
        parser::parse_board_file(path, triggers)
            .with_context(|| format!("Failed to load board from {}", path.display()))
    }

    /// Loads a board, or starts an empty one if the file does not exist yet.
    pub fn load_or_default(path: &Path, triggers: TriggerSet) -> Result<BoardState> {
        if path.exists() {
            Self::load(path, triggers)
        } else {
            debug!("Board file {} not found, starting empty", path.display());
            Ok(BoardState::new(triggers))
        }
    }

    /// Saves a board to a board file.
    ///
    /// This performs an atomic write using a temp file + rename pattern to ensure
    /// the file is never left in a corrupted state.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aacboard::models::{BoardState, TriggerSet};
    /// use aacboard::services::BoardService;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let mut board = BoardState::new(TriggerSet::new(["img/food/plate.png"]));
    /// board.add("img/food/plate.png", "Food");
    /// BoardService::save(&board, Path::new("board.txt"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(board: &BoardState, path: &Path) -> Result<()> {
        board
            .export(path)
            .with_context(|| format!("Failed to save board to {}", path.display()))
    }
}
