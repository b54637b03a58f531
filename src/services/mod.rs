//! Service layer for file-facing operations.
//!
//! This module contains services that coordinate between the board model
//! and the board file format.

pub mod boards;

// Re-export commonly used types and functions
pub use boards::BoardService;
