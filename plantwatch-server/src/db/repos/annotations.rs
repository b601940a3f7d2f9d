//! Annotations - human labels drawn on a sample

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::Resource;

/// Annotation record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Annotation {
    pub id: i32,
    pub sample_id: Option<i32>,
    pub annotator_id: Option<i32>,
    /// Bounding box as stored (`jsonb`).
    pub bbox: Option<Value>,
    pub label: Option<String>,
    /// `numeric(5,2)` read as `float8`.
    pub confidence: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
}

impl Resource for Annotation {
    const NAME: &'static str = "annotation";
    const TABLE: &'static str = "annotations";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, sample_id, annotator_id, bbox, label, \
        confidence::float8 AS confidence, created_at";
}
