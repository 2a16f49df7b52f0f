//! CLI module for appmeta
//!
//! Provides the command-line interface:
//! - serve: construct the store and enter the HTTP serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
