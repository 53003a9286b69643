use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog entry for a marine fuel grade (e.g. "VLSFO").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelType {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    /// Typical density at 15 C, used when a reading omits density
    pub reference_density_kg_m3: f64,
}
