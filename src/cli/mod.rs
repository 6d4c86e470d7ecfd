//! CLI module
//!
//! Provides the command-line interface:
//! - reference output: operator table and example gallery
//! - interactive query builder
//! - demo search with optional export of the result log

mod args;
mod commands;
mod errors;
mod io;
mod session;

pub use args::{Cli, Mode};
pub use commands::{run, run_mode};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::Console;
pub use session::Session;
