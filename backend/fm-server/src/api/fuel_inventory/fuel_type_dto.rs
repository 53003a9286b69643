use fm_core::FuelType;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelTypeDto {
    pub id: String,
    pub code: String,
    pub name: String,
    pub reference_density_kg_m3: f64,
}

impl From<FuelType> for FuelTypeDto {
    fn from(f: FuelType) -> Self {
        Self {
            id: f.id.to_string(),
            code: f.code,
            name: f.name,
            reference_density_kg_m3: f.reference_density_kg_m3,
        }
    }
}
