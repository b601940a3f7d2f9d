//! Audit log - append-only record of who touched which entity

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use super::Resource;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AuditLog {
    pub id: i32,
    pub entity: Option<String>,
    pub entity_id: Option<i32>,
    pub action: Option<String>,
    pub user_id: Option<i32>,
    pub timestamp: Option<NaiveDateTime>,
}

impl Resource for AuditLog {
    const NAME: &'static str = "audit log";
    const TABLE: &'static str = "audit_logs";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, entity, entity_id, action, user_id, timestamp";
}
