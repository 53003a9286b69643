use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tank sounding converted to mass and stored against a ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelInventoryRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub ship_id: Uuid,
    pub fuel_type_id: Uuid,
    pub volume_m3: f64,
    /// Density at 15 C used for the calculation
    pub density_kg_m3: f64,
    pub temperature_c: f64,
    /// Metric tonnes
    pub mass_mt: f64,
    pub recorded_at: DateTime<Utc>,
    pub created_by: Uuid,
}
