//! dorkbr CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors that reach
//! this point are fatal: they are printed to stderr and the process exits
//! with a non-zero status.

use dorkbr::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
