//! Treatments - standalone recommendations per disease label

use serde::Serialize;
use sqlx::FromRow;

use super::Resource;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Treatment {
    pub id: i32,
    pub disease_label: Option<String>,
    #[serde(rename = "recomendacoes_texto")]
    pub recommendation_text: Option<String>,
    pub severity_level: Option<String>,
}

impl Resource for Treatment {
    const NAME: &'static str = "treatment";
    const TABLE: &'static str = "treatments";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str =
        "id, disease_label, recomendacoes_texto AS recommendation_text, severity_level";
}
