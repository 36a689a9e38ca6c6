//! System abstraction for console output
//!
//! This module provides a trait for the process's standard output stream,
//! allowing tests to capture what the tool prints without spawning it.

use std::io;

pub mod mock;
pub mod real;

pub use mock::MockConsole;
pub use real::RealConsole;

/// Trait for writing to the process console
///
/// # Implementations
/// - `RealConsole`: Production implementation using `std::io::stdout`
/// - `MockConsole`: Test implementation capturing output in memory
pub trait Console: Send + Sync {
    /// Write text to standard output and flush it
    fn write_stdout(&self, text: &str) -> io::Result<()>;
}
