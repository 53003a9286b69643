use crate::FuelInventoryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FuelInventoryResponse {
    pub record: FuelInventoryDto,
}
