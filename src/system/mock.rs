//! Mock console implementation for testing

use super::Console;
use std::io;
use std::sync::{Arc, RwLock};

/// In-memory implementation of the Console trait for testing
///
/// # Example
/// ```
/// use goonj::system::{Console, MockConsole};
///
/// let console = MockConsole::new();
/// console.write_stdout("hello\n").unwrap();
///
/// assert_eq!(console.stdout_contents(), "hello\n");
/// assert_eq!(console.write_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockConsole {
    state: Arc<RwLock<MockConsoleState>>,
}

#[derive(Default)]
struct MockConsoleState {
    stdout: Vec<u8>,
    writes: usize,
    failure: Option<io::ErrorKind>,
}

impl MockConsole {
    /// Create a new `MockConsole` with empty output
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write fail with the given error kind (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal lock is poisoned
    #[inline]
    pub fn with_failing_stdout(self, kind: io::ErrorKind) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.failure = Some(kind);
        drop(state);
        Ok(self)
    }

    /// Everything written to standard output so far, lossily decoded
    #[must_use]
    #[inline]
    pub fn stdout_contents(&self) -> String {
        self.state
            .read()
            .map(|state| String::from_utf8_lossy(&state.stdout).into_owned())
            .unwrap_or_default()
    }

    /// Number of successful writes
    #[must_use]
    #[inline]
    pub fn write_count(&self) -> usize {
        self.state.read().map(|state| state.writes).unwrap_or_default()
    }
}

impl Console for MockConsole {
    #[inline]
    fn write_stdout(&self, text: &str) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        if let Some(kind) = state.failure {
            return Err(io::Error::new(kind, "mock stdout failure"));
        }
        state.stdout.extend_from_slice(text.as_bytes());
        state.writes += 1;
        Ok(())
    }
}
