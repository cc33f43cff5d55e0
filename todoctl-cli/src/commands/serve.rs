//! HTTP server command
//!
//! Opens (and if needed creates) the SQLite database, makes sure the schema
//! exists, then serves the todo list until Ctrl+C/SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::{create_pool_with_options, init_schema};
use todoctl_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: config `server.bind`, 127.0.0.1:5001)
    #[arg(long, short = 'b', env = "TODOCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (default: config `database.path`)
    #[arg(long, env = "TODOCTL_DATABASE")]
    pub db_path: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = super::load_config(args.db_path)?;

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address in config: {}", config.server.bind))?,
    };

    tracing::info!("Opening database at {}", config.database.path.display());
    let pool = create_pool_with_options(&config.database.path, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    init_schema(&pool)
        .await
        .context("Failed to initialize database schema")?;

    // Run server (blocks until shutdown)
    run_server(pool, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
