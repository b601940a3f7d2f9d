//! Database layer - connection pool, migrations and repositories
//!
//! Every handler performs exactly one query. Reads go straight to the
//! pool; the single write runs inside its own transaction.

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;

use sqlx::PgPool;

/// Schema migrations shipped with the crate (`migrations/` at the workspace root).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");

/// Apply pending migrations.
///
/// The deployed database predates the migrations, so every statement is
/// `IF NOT EXISTS` and running this against it is harmless.
pub async fn migrate(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Applying schema migrations...");
    MIGRATOR.run(pool).await?;
    Ok(())
}
