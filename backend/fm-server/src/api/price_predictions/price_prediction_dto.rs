use fm_core::PricePrediction;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PricePredictionDto {
    pub id: String,
    pub account_id: String,
    pub fuel_type_id: String,
    pub port: String,
    pub predicted_price_usd_mt: f64,
    /// `YYYY-MM-DD`
    pub prediction_date: String,
    pub created_at: i64,
}

impl From<PricePrediction> for PricePredictionDto {
    fn from(p: PricePrediction) -> Self {
        Self {
            id: p.id.to_string(),
            account_id: p.account_id.to_string(),
            fuel_type_id: p.fuel_type_id.to_string(),
            port: p.port,
            predicted_price_usd_mt: p.predicted_price_usd_mt,
            prediction_date: p.prediction_date.format("%Y-%m-%d").to_string(),
            created_at: p.created_at.timestamp(),
        }
    }
}
