//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use plantwatch_server::db::{self, create_pool};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (PostgreSQL with PostGIS)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

/// Apply pending migrations and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = super::require_database_url(args.database_url)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    db::migrate(&pool)
        .await
        .context("Failed to apply migrations")?;

    tracing::info!("Migrations applied");
    Ok(())
}
