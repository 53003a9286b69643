use serde::Deserialize;

/// Laboratory sample for a bunker delivery
#[derive(Debug, Deserialize)]
pub struct CreateFuelQualityRequest {
    pub ship_id: String,
    pub fuel_type_id: String,
    pub density_15c_kg_m3: f64,

    #[serde(default)]
    pub viscosity_cst: Option<f64>,

    #[serde(default)]
    pub sulphur_pct: Option<f64>,

    #[serde(default)]
    pub water_pct: Option<f64>,

    /// Unix seconds; now when omitted
    #[serde(default)]
    pub sampled_at: Option<i64>,
}
