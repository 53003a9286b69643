use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Laboratory analysis of a bunker sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelQualityRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub ship_id: Uuid,
    pub fuel_type_id: Uuid,
    pub density_15c_kg_m3: f64,
    pub viscosity_cst: Option<f64>,
    pub sulphur_pct: Option<f64>,
    pub water_pct: Option<f64>,
    pub sampled_at: DateTime<Utc>,
    pub created_by: Uuid,
}
