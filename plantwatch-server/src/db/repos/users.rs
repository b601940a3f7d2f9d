//! Users - people who own devices, collect samples and annotate them

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use super::Resource;

/// User record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    /// Unique across users.
    pub email: String,
    pub role: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Resource for User {
    const NAME: &'static str = "user";
    const TABLE: &'static str = "users";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, nome AS name, email, role, created_at";
}
