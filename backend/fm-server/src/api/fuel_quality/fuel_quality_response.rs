use crate::FuelQualityDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelQualityResponse {
    pub sample: FuelQualityDto,
}
