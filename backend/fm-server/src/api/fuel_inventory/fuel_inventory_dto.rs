use fm_core::FuelInventoryRecord;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelInventoryDto {
    pub id: String,
    pub account_id: String,
    pub ship_id: String,
    pub fuel_type_id: String,
    pub volume_m3: f64,
    pub density_kg_m3: f64,
    pub temperature_c: f64,
    pub mass_mt: f64,
    pub recorded_at: i64,
    pub created_by: String,
}

impl From<FuelInventoryRecord> for FuelInventoryDto {
    fn from(r: FuelInventoryRecord) -> Self {
        Self {
            id: r.id.to_string(),
            account_id: r.account_id.to_string(),
            ship_id: r.ship_id.to_string(),
            fuel_type_id: r.fuel_type_id.to_string(),
            volume_m3: r.volume_m3,
            density_kg_m3: r.density_kg_m3,
            temperature_c: r.temperature_c,
            mass_mt: r.mass_mt,
            recorded_at: r.recorded_at.timestamp(),
            created_by: r.created_by.to_string(),
        }
    }
}
