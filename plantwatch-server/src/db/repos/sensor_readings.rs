//! Sensor readings - humidity/temperature pairs pushed by field devices
//!
//! The only table written through the API. Rows are created with a
//! server-assigned timestamp inside a single transaction.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::{DbError, Resource};
use crate::models::NewReading;

/// Sensor reading record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SensorReading {
    pub id: i32,
    #[serde(rename = "umidade")]
    pub humidity: Option<f64>,
    #[serde(rename = "temperatura")]
    pub temperature: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for SensorReading {
    const NAME: &'static str = "sensor reading";
    const TABLE: &'static str = "sensores";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, umidade::float8 AS humidity, \
        temperatura::float8 AS temperature, created_at";
}

/// Sensor reading repository (write side)
pub struct SensorReadingRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SensorReadingRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a reading and return its id.
    ///
    /// Any failure before `commit` drops the transaction, which rolls it
    /// back; no partial row is ever visible.
    pub async fn insert(&self, reading: &NewReading) -> Result<i32, DbError> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO sensores (temperatura, umidade, created_at)
            VALUES ($1::numeric, $2::numeric, now())
            RETURNING id
            "#,
        )
        .bind(reading.temperature)
        .bind(reading.humidity)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id, "sensor reading stored");
        Ok(id)
    }
}
