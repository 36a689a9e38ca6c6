//! Goonj - echoes command-line arguments to stdout/stderr
//!
//! This library holds the argument handling behind the `goonj` binary:
//! parsing the invocation, deciding whether to print the usage block, and
//! mapping failures to exit codes.

pub mod cli;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Args;
use error::GoonjError;
use std::ffi::OsString;
use system::Console;
use tracing::debug;

/// Main entry point for the goonj library
///
/// `invocation` includes the program name, as returned by
/// `std::env::args_os()`.
pub fn run<I, T>(invocation: I, console: &dyn Console) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::from_invocation(invocation)?;
    run_with_args(&args, console)
}

/// Run with already-parsed arguments
pub fn run_with_args(args: &Args, console: &dyn Console) -> Result<()> {
    debug!(
        "Received {} argument(s), {} positional, help={}",
        args.argument_count,
        args.arguments.len(),
        args.help
    );
    let action = operations::resolve(args);
    operations::execute(action, console)?;
    Ok(())
}

/// Exit status for an error returned by `run`
#[must_use]
pub fn exit_status(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<GoonjError>()
        .map_or(1, GoonjError::exit_code)
}
