//! CLI argument definitions using clap
//!
//! Commands:
//! - appmeta serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// appmeta - an in-memory application metadata registry
#[derive(Parser, Debug)]
#[command(name = "appmeta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the registry HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
