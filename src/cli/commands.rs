//! CLI command implementations

use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::registry::Store;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Start the registry HTTP server.
///
/// Builds the single process-wide store, wires it into the router, and
/// blocks on the server until the process exits. The store starts empty and
/// is abandoned on exit; there is no persistence.
pub fn serve(host: String, port: u16) -> CliResult<()> {
    let config = HttpServerConfig::with_addr(host, port);
    let store = Arc::new(Store::new());
    let server = HttpServer::with_config(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            Logger::error("server_failed", &[("error", &e.to_string())]);
            CliError::server_failed(format!("HTTP server failed: {}", e))
        })
    })
}
