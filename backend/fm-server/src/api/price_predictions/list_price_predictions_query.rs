use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListPricePredictionsQuery {
    /// Fuel type code, e.g. `VLSFO`
    pub fuel_type: Option<String>,
    pub port: Option<String>,
}
