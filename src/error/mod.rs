//! Error handling module
//!
//! Defines the goonj error type and its exit codes

pub mod types;

pub use types::*;
