//! Command-line interface module
//!
//! Handles argument parsing and the usage text

pub mod args;
pub mod usage;

pub use args::*;
pub use usage::*;
