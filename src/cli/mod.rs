//! CLI command handlers for AACBoard.
//!
//! This module provides headless, scriptable access to boards: listing,
//! adding, replaying selections, and an interactive session.

pub mod add;
pub mod common;
pub mod config;
pub mod session;
pub mod show;
pub mod speak;

// Re-export types used by main.rs and tests
pub use add::AddArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use session::SessionArgs;
pub use show::ShowArgs;
pub use speak::SpeakArgs;
