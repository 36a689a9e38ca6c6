//! Usage text shown when goonj runs without arguments or with `--help`

use crate::error::GoonjError;
use crate::system::Console;
use tracing::debug;

/// The fixed usage block, byte for byte
pub const USAGE: &str = "\
Goonj - echoes command-line arguments to stdout/stderr.

Usage: goonj [options]

Options:
  --help             Displays how the tool is supposed to be used.
";

/// Write the usage block to standard output
///
/// # Errors
///
/// Returns `GoonjError::Output` if standard output cannot be written.
pub fn show_usage(console: &dyn Console) -> Result<(), GoonjError> {
    debug!("Writing usage text ({} bytes)", USAGE.len());
    console
        .write_stdout(USAGE)
        .map_err(|e| GoonjError::output(format!("Failed to write usage text: {e}")))
}
