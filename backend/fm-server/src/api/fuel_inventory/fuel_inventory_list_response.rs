use crate::FuelInventoryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelInventoryListResponse {
    pub records: Vec<FuelInventoryDto>,
}
