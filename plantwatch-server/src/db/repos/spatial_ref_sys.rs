//! PostGIS spatial reference systems (populated by the extension)

use serde::Serialize;
use sqlx::FromRow;

use super::Resource;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SpatialRefSys {
    pub srid: i32,
    pub auth_name: Option<String>,
    pub auth_srid: Option<i32>,
    pub srtext: Option<String>,
    pub proj4text: Option<String>,
}

impl Resource for SpatialRefSys {
    const NAME: &'static str = "spatial reference system";
    const TABLE: &'static str = "spatial_ref_sys";
    const KEY: &'static str = "srid";
    const COLUMNS: &'static str = "srid, auth_name, auth_srid, srtext, proj4text";
}
