//! Real console implementation using `std::io::stdout`

use super::Console;
use std::io::{self, Write as _};

/// Production implementation of the Console trait
#[derive(Debug, Clone, Copy)]
pub struct RealConsole;

impl RealConsole {
    /// Create a new `RealConsole` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for RealConsole {
    fn write_stdout(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}
