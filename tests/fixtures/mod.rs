//! Shared test fixtures for board and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use aacboard::models::{BoardState, TriggerSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Board file with one category holding two pictograms.
pub const FOOD_BOARD: &str = "\
img/food/plate.png Food
>img/food/apple.png Apple
>img/food/bread.png I want bread
";

/// Board file with two categories.
pub const TWO_CATEGORY_BOARD: &str = "\
img/food/plate.png Food
>img/food/apple.png Apple
img/clothing/hanger.png Clothes
>img/clothing/shirt.png Shirt
>img/clothing/socks.png Socks
";

/// Triggers matching the default configuration.
pub fn default_triggers() -> TriggerSet {
    TriggerSet::new(["img/food/plate.png", "img/clothing/hanger.png"])
}

/// Board built through the API the way a user would assemble it.
///
/// Root holds the plate (opens "Food") and the apple (a plain pictogram).
pub fn test_board_scenario() -> BoardState {
    let mut board = BoardState::new(default_triggers());
    board.add("img/food/plate.png", "Food");
    board.add("img/apple.png", "Apple");
    board
}

/// Writes `content` to `name` inside `temp_dir`.
pub fn write_board_file(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write board fixture");
    path
}

/// Creates a temporary directory for test outputs.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Path to the aacboard binary built by cargo for integration tests.
pub fn aacboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_aacboard")
}

/// Creates a Command whose configuration lives in `config_dir`.
pub fn aacboard_command(config_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(aacboard_bin());
    cmd.env("AACBOARD_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}
