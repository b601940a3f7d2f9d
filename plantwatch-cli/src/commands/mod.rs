//! Command implementations for plantwatch CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the database URL given on the command line or in the environment.
pub(crate) fn require_database_url(database_url: Option<String>) -> Result<String> {
    database_url
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
}
