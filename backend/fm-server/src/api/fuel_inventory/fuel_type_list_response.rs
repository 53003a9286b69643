use crate::FuelTypeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelTypeListResponse {
    pub fuel_types: Vec<FuelTypeDto>,
}
