//! Table-backed resources and the generic read repository

use std::marker::PhantomData;

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// A table exposed as a get-latest / get-by-key pair.
///
/// The associated constants are static SQL fragments, never user input,
/// so they are safe to splice into query text.
pub trait Resource: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    /// Singular name used in error messages.
    const NAME: &'static str;

    /// Table name; also the URL segment the resource is served under.
    const TABLE: &'static str;

    /// Primary-key column (integer).
    const KEY: &'static str;

    /// Select list producing the row type's fields. Casts and aliases live
    /// here: `numeric` is read as `float8`, geography points as WKT.
    const COLUMNS: &'static str;
}

/// Read-only repository over any [`Resource`].
pub struct ResourceRepo<'a, R> {
    pool: &'a PgPool,
    _row: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> ResourceRepo<'a, R> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            _row: PhantomData,
        }
    }

    /// Row with the highest primary key, or `None` for an empty table.
    pub async fn latest(&self) -> Result<Option<R>, DbError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {} DESC LIMIT 1",
            R::COLUMNS,
            R::TABLE,
            R::KEY
        );

        let row = sqlx::query_as::<_, R>(&sql)
            .fetch_optional(self.pool)
            .await?;

        Ok(row)
    }

    /// Row with the given primary key.
    pub async fn get(&self, key: i32) -> Result<R, DbError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            R::COLUMNS,
            R::TABLE,
            R::KEY
        );

        sqlx::query_as::<_, R>(&sql)
            .bind(key)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: R::NAME,
                id: key.to_string(),
            })
    }
}
