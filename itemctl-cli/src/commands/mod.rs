//! Subcommand implementations

pub mod init_db;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;

use itemctl_server::db::DEFAULT_MAX_CONNECTIONS;
use itemctl_server::PgItemStore;

/// Database connection arguments shared by subcommands
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string (also read from .env)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Connect to PostgreSQL and bootstrap the `items` table.
    pub async fn connect(&self) -> Result<PgItemStore> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        PgItemStore::connect(database_url, self.max_connections)
            .await
            .context("Failed to connect to database")
    }
}
