//! Argument-driven dispatch
//!
//! Decides what a parsed invocation should do and carries it out.

use crate::cli::Args;
use crate::cli::usage::show_usage;
use crate::error::GoonjError;
use crate::system::Console;
use tracing::debug;

/// What a single invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the usage block to standard output
    ShowUsage,
    /// Exit successfully without output
    NoOp,
}

/// Pick the action for an invocation
///
/// Usage is shown when no arguments were given or `--help` is present.
/// Positional arguments alone produce no output.
#[must_use]
pub fn resolve(args: &Args) -> Action {
    if args.is_empty() || args.help {
        Action::ShowUsage
    } else {
        Action::NoOp
    }
}

/// Carry out an action
///
/// # Errors
///
/// Returns `GoonjError::Output` if usage text cannot be written.
pub fn execute(action: Action, console: &dyn Console) -> Result<(), GoonjError> {
    debug!("Executing {:?}", action);
    match action {
        Action::ShowUsage => show_usage(console),
        Action::NoOp => Ok(()),
    }
}
