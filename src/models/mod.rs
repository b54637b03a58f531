//! Data models for AAC boards.
//!
//! This module contains the ordered container the board is built on, the
//! category model, and the navigation state. Models are independent of the
//! file format and the command-line front end.

pub mod board;
pub mod category;
pub mod ordered_map;

// Re-export all model types
pub use board::{
    validate_category_key, validate_image_location, validate_text, BoardState, Registration,
    TriggerSet, ROOT_KEY,
};
pub use category::{Category, Pictogram};
pub use ordered_map::{MapError, OrderedMap};
