use fm_core::FuelQualityRecord;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelQualityDto {
    pub id: String,
    pub account_id: String,
    pub ship_id: String,
    pub fuel_type_id: String,
    pub density_15c_kg_m3: f64,
    pub viscosity_cst: Option<f64>,
    pub sulphur_pct: Option<f64>,
    pub water_pct: Option<f64>,
    pub sampled_at: i64,
    pub created_by: String,
}

impl From<FuelQualityRecord> for FuelQualityDto {
    fn from(r: FuelQualityRecord) -> Self {
        Self {
            id: r.id.to_string(),
            account_id: r.account_id.to_string(),
            ship_id: r.ship_id.to_string(),
            fuel_type_id: r.fuel_type_id.to_string(),
            density_15c_kg_m3: r.density_15c_kg_m3,
            viscosity_cst: r.viscosity_cst,
            sulphur_pct: r.sulphur_pct,
            water_pct: r.water_pct,
            sampled_at: r.sampled_at.timestamp(),
            created_by: r.created_by.to_string(),
        }
    }
}
