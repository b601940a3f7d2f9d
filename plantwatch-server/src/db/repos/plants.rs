//! Plants - species catalogue samples are taken from

use serde::Serialize;
use sqlx::FromRow;

use super::Resource;

/// Plant record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Plant {
    pub id: i32,
    #[serde(rename = "nome_comum")]
    pub common_name: String,
    #[serde(rename = "nome_cientifico")]
    pub scientific_name: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

impl Resource for Plant {
    const NAME: &'static str = "plant";
    const TABLE: &'static str = "plants";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, nome_comum AS common_name, \
        nome_cientifico AS scientific_name, descricao AS description";
}
