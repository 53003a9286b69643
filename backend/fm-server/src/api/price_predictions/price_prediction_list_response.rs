use crate::PricePredictionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PricePredictionListResponse {
    pub predictions: Vec<PricePredictionDto>,
}
