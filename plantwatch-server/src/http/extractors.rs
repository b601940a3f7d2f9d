//! Custom Axum extractors

use std::marker::PhantomData;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::db::Resource;

/// Primary key of resource `R`, taken from the last path segment.
///
/// A segment that is not a 32-bit integer cannot name a row, so it is
/// rejected as not found rather than as a bad request.
pub struct RowKey<R> {
    pub key: i32,
    _resource: PhantomData<fn() -> R>,
}

impl<R, S> FromRequestParts<S> for RowKey<R>
where
    R: Resource,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: R::NAME,
                id: String::new(),
            })?;

        let key = raw.parse::<i32>().map_err(|_| ApiError::NotFound {
            resource: R::NAME,
            id: raw.clone(),
        })?;

        Ok(Self {
            key,
            _resource: PhantomData,
        })
    }
}
