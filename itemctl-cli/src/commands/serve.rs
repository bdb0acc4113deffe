//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::{run_server, AppState, MemoryItemStore, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep items in process memory instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let state = if args.in_memory {
        tracing::warn!("serving from memory; items are lost on exit");
        AppState::new(MemoryItemStore::new())
    } else {
        AppState::new(args.db.connect().await?)
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(state, config).await.context("Server error")?;
    Ok(())
}
