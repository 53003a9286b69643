use crate::ShipDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShipListResponse {
    pub ships: Vec<ShipDto>,
}
