//! Samples - captured plant images with capture context

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::Resource;

/// Sample record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Sample {
    pub id: i32,
    pub device_id: Option<i32>,
    pub user_id: Option<i32>,
    pub plant_id: Option<i32>,
    pub image_path: String,
    pub thumb_path: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub location: Option<String>,
    /// Stored as `jsonb`, passed through untouched.
    pub weather_meta: Option<Value>,
    pub notes: Option<String>,
}

impl Resource for Sample {
    const NAME: &'static str = "sample";
    const TABLE: &'static str = "samples";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, device_id, user_id, plant_id, image_path, thumb_path, \
        timestamp, ST_AsText(location) AS location, weather_meta, notes";
}
