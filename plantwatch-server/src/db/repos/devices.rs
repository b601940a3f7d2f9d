//! Devices - field cameras and sensor boxes registered to a user

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use super::Resource;

/// Device record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Device {
    pub id: i32,
    #[serde(rename = "users_id")]
    pub user_id: Option<i32>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "modelo")]
    pub model: Option<String>,
    pub last_seen: Option<NaiveDateTime>,
    /// Well-known text, e.g. `POINT(-46.63 -23.55)`.
    pub location: Option<String>,
}

impl Resource for Device {
    const NAME: &'static str = "device";
    const TABLE: &'static str = "devices";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, users_id AS user_id, tipo AS kind, modelo AS model, \
        last_seen, ST_AsText(location) AS location";
}
