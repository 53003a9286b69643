use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    pub id: Uuid,
    pub account_id: Uuid,
    pub fuel_type_id: Uuid,
    /// UN/LOCODE or free-form port name
    pub port: String,
    pub predicted_price_usd_mt: f64,
    pub prediction_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
