//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for goonj operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GoonjError {
    /// An option-looking token that the tool does not know
    #[error("Unrecognized option: {option}")]
    UnrecognizedOption { option: String },

    /// Argument parsing failed for a reason other than an unknown option
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Writing to standard output failed
    #[error("Output error: {message}")]
    Output { message: String },
}

impl GoonjError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::UnrecognizedOption { .. } | Self::InvalidArguments { .. } => 2,
            Self::Output { .. } => 1,
        }
    }

    /// Create an unrecognized option error
    #[inline]
    pub fn unrecognized_option<S: Into<String>>(option: S) -> Self {
        Self::UnrecognizedOption {
            option: option.into(),
        }
    }

    /// Create an invalid arguments error
    #[inline]
    pub fn invalid_arguments<S: Into<String>>(message: S) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create an output error
    #[inline]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}
