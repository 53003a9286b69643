use serde::Deserialize;

/// Tank reading to convert to mass and store.
///
/// The account is named in the body rather than the path, so membership is
/// checked after the body is parsed.
#[derive(Debug, Deserialize)]
pub struct CalculateAndSaveRequest {
    pub account_id: String,
    pub ship_id: String,
    pub fuel_type_id: String,
    pub volume_m3: f64,
    pub temperature_c: f64,

    /// Density at 15 C; the fuel type's reference density when omitted
    #[serde(default)]
    pub density_kg_m3: Option<f64>,

    /// Unix seconds; now when omitted
    #[serde(default)]
    pub recorded_at: Option<i64>,
}
