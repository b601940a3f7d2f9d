//! plantwatch CLI - launcher for the plant-monitoring HTTP API
//!
//! - `serve`: run the HTTP API against a PostGIS database
//! - `migrate`: apply schema migrations to a fresh database
//!
//! Configuration comes from flags, the environment, or a `.env` file in the
//! working directory, and is fixed once the process starts.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "plantwatch",
    author,
    version,
    about = "HTTP API for plant-monitoring devices, samples, diagnoses and sensor readings"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Apply schema migrations and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before parsing so clap sees values from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}
