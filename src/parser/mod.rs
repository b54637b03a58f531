//! Parsing and serialization of board files.
//!
//! This module handles reading boards from the line-oriented board format
//! and writing them back on export.

pub mod board;
pub mod board_gen;

// Re-export commonly used functions
pub use board::{parse_board_file, parse_board_str};
pub use board_gen::{check_writable, generate_board_text, save_board};
