use crate::ShipDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShipResponse {
    pub ship: ShipDto,
}
