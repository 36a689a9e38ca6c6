//! Operations module
//!
//! Maps a parsed invocation to the action it performs

pub mod dispatch;

pub use dispatch::*;
