//! `cohorts-api` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — provision the `cohorts` and `students` tables.
//!
//! Settings come from flags, then the environment, then a `.env` file.

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cohorts-api",
    about = "REST API for cohorts and their students",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Run pending database migrations.
    Migrate {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Args)]
struct DatabaseArgs {
    /// SQLite connection string.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://data/lambdaschool.db3")]
    database_url: String,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port, database } => {
            let pool = db::pool::create_pool(&database.database_url, database.max_connections)
                .await
                .with_context(|| format!("failed to connect to {}", database.database_url))?;
            api::serve(SocketAddr::new(host, port), pool)
                .await
                .context("server error")?;
        }
        Command::Migrate { database } => {
            info!("Running migrations against {}", database.database_url);
            let pool = db::pool::create_pool(&database.database_url, 1)
                .await
                .with_context(|| format!("failed to connect to {}", database.database_url))?;
            db::pool::run_migrations(&pool)
                .await
                .context("migration failed")?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
