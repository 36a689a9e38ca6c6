//! # Goonj
//!
//! `goonj` is a small command-line tool. Run without arguments (or with
//! `--help`) it prints its usage block to standard output.
//!
//! ## Usage
//!
//! ```sh
//! goonj [options]
//! ```
//!
//! Unknown options are reported on standard error with exit status 2.
//! Set `RUST_LOG=debug` to trace argument handling on standard error.

use std::io::IsTerminal as _;

use goonj::system::RealConsole;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    // Default to warn so that successful runs stay silent on stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();

    let console = RealConsole::new();
    match goonj::run(std::env::args_os(), &console) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(goonj::exit_status(&err));
        }
    }
}
