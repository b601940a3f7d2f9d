//! Sensor reading endpoints
//!
//! Reads behave like every other resource; `POST /sensores` ingests a
//! new reading.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::resources::{by_key, collection_path, item_path, latest};
use crate::db::repos::{SensorReading, SensorReadingRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::NewReading;

/// Created reading response
#[derive(Serialize)]
pub struct ReadingCreated {
    pub message: &'static str,
    pub id: i32,
}

/// POST /sensores - store a reading
///
/// The body is read raw so devices that omit `Content-Type` are still
/// accepted, and so malformed JSON reports through [`ApiError`].
async fn create_reading(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<ReadingCreated>), ApiError> {
    let reading = NewReading::from_slice(&body)?;
    let id = SensorReadingRepo::new(&state.pool).insert(&reading).await?;

    tracing::info!(
        id,
        temperature = reading.temperature,
        humidity = reading.humidity,
        "Sensor reading saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(ReadingCreated {
            message: "sensor reading saved",
            id,
        }),
    ))
}

/// Sensor reading routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &collection_path::<SensorReading>(),
            get(latest::<SensorReading>).post(create_reading),
        )
        .route(&item_path::<SensorReading>(), get(by_key::<SensorReading>))
}
