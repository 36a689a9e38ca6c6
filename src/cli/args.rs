//! Command-line argument parsing

use crate::error::GoonjError;
use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::ffi::OsString;

/// Command-line arguments for goonj
///
/// clap's generated help and version flags are disabled: `--help` is a plain
/// flag here so the tool prints its own fixed usage text.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "goonj")]
#[command(about = "Goonj - echoes command-line arguments to stdout/stderr.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Args {
    /// Displays how the tool is supposed to be used.
    #[arg(long)]
    pub help: bool,

    /// Remaining positional arguments, in invocation order
    #[arg(value_name = "ARGS")]
    pub arguments: Vec<OsString>,

    /// Number of raw tokens after the program name, including a bare `--`
    #[arg(skip)]
    pub argument_count: usize,
}

impl Args {
    /// Parse a full invocation (program name first) into `Args`
    ///
    /// # Errors
    ///
    /// Returns `GoonjError::UnrecognizedOption` for option tokens other than
    /// `--help`, and `GoonjError::InvalidArguments` for any other parse failure.
    pub fn from_invocation<I, T>(invocation: I) -> Result<Self, GoonjError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let tokens: Vec<OsString> = invocation.into_iter().map(Into::into).collect();
        let argument_count = tokens.len().saturating_sub(1);

        let mut args = Self::try_parse_from(tokens).map_err(|err| parse_error(&err))?;
        args.argument_count = argument_count;
        Ok(args)
    }

    /// True when the process received no arguments at all
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.argument_count == 0 && !self.help && self.arguments.is_empty()
    }
}

/// Translate a clap parse failure into a goonj error
fn parse_error(err: &clap::Error) -> GoonjError {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(option)) = err.get(ContextKind::InvalidArg) {
            return GoonjError::unrecognized_option(option.clone());
        }
    }

    // clap renders a multi-line report; the first line carries the reason
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_owned();
    GoonjError::invalid_arguments(message)
}
