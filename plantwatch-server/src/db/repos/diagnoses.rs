//! Diagnoses - automated model predictions for a sample

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use super::Resource;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Diagnose {
    pub id: i32,
    pub sample_id: Option<i32>,
    pub model_version: Option<String>,
    pub predicted_label: Option<String>,
    pub confidence: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
}

impl Resource for Diagnose {
    const NAME: &'static str = "diagnosis";
    const TABLE: &'static str = "diagnoses";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, sample_id, model_version, predicted_label, \
        confidence::float8 AS confidence, created_at";
}
