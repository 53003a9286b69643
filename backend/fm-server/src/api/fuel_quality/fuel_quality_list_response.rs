use crate::FuelQualityDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelQualityListResponse {
    pub samples: Vec<FuelQualityDto>,
}
