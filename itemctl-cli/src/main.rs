//! itemctl - inventory items CRUD service
//!
//! - `serve`: run the HTTP API
//! - `init-db`: create the `items` table and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::init_db::{run_init_db, InitDbArgs};
use commands::serve::{run_serve, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "itemctl", author, version, about = "CRUD HTTP service for inventory items")]
struct Cli {
    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Create the items table if it doesn't exist
    InitDb(InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed arguments
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::InitDb(args) => run_init_db(args).await,
    };

    tracing_setup::shutdown();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["itemctl", "serve", "--in-memory"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.port(), 8000);
        assert!(args.in_memory);
        assert!(!args.cors_permissive);
        assert_eq!(args.db.max_connections, 5);
    }

    #[test]
    fn serve_accepts_bind_override() {
        let cli = Cli::try_parse_from(["itemctl", "serve", "--bind", "127.0.0.1:9000"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind, "127.0.0.1:9000".parse::<std::net::SocketAddr>().unwrap());
    }
}
