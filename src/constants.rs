//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the board defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "AAC Board";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "aacboard";

/// Text spoken for an image that is not on the open board.
pub const IMAGE_NOT_FOUND: &str = "Image not found";

/// Prefix marking a pictogram line inside a category block of a board file.
pub const ITEM_PREFIX: char = '>';

/// Category triggers used when no configuration overrides them.
pub const DEFAULT_CATEGORY_TRIGGERS: &[&str] = &["img/food/plate.png", "img/clothing/hanger.png"];
