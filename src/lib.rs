//! AAC Board Library
//!
//! This library provides the data layer for an Augmentative and Alternative
//! Communication picture board: an array-backed ordered map, categories of
//! pictograms built on it, the board navigation state, and the board file
//! format.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
