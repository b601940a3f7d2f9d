//! Read endpoints shared by every table-backed resource
//!
//! `GET /{table}` returns the row with the highest key (204 when the table
//! is empty); `GET /{table}/{key}` returns one row or 404.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::db::repos::{
    Annotation, AuditLog, Device, Diagnose, Plant, Resource, ResourceRepo, Sample, SpatialRefSys,
    Treatment, User,
};
use crate::http::error::ApiError;
use crate::http::extractors::RowKey;
use crate::http::server::AppState;

/// GET /{table} - most recently inserted row
pub(crate) async fn latest<R: Resource>(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let response = match ResourceRepo::<R>::new(&state.pool).latest().await? {
        Some(row) => Json(row).into_response(),
        None => (StatusCode::NO_CONTENT, Json(json!({}))).into_response(),
    };

    Ok(response)
}

/// GET /{table}/{key} - single row by primary key
pub(crate) async fn by_key<R: Resource>(
    State(state): State<Arc<AppState>>,
    row_key: RowKey<R>,
) -> Result<Json<R>, ApiError> {
    let row = ResourceRepo::<R>::new(&state.pool).get(row_key.key).await?;
    Ok(Json(row))
}

/// Collection path for a resource, e.g. `/users`.
pub(crate) fn collection_path<R: Resource>() -> String {
    format!("/{}", R::TABLE)
}

/// Item path for a resource, e.g. `/users/{key}`.
pub(crate) fn item_path<R: Resource>() -> String {
    format!("/{}/{{key}}", R::TABLE)
}

/// Read-only routes for one resource
pub fn resource_router<R: Resource>() -> Router<Arc<AppState>> {
    Router::new()
        .route(&collection_path::<R>(), get(latest::<R>))
        .route(&item_path::<R>(), get(by_key::<R>))
}

/// Read-only routes for every resource except sensor readings
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(resource_router::<User>())
        .merge(resource_router::<Plant>())
        .merge(resource_router::<Sample>())
        .merge(resource_router::<Device>())
        .merge(resource_router::<Annotation>())
        .merge(resource_router::<Diagnose>())
        .merge(resource_router::<Treatment>())
        .merge(resource_router::<AuditLog>())
        .merge(resource_router::<SpatialRefSys>())
}
