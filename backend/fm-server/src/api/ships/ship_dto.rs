use fm_core::Ship;

use serde::Serialize;

/// Ship DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ShipDto {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub imo_number: Option<String>,
    pub created_at: i64,
    pub created_by: String,
}

impl From<Ship> for ShipDto {
    fn from(s: Ship) -> Self {
        Self {
            id: s.id.to_string(),
            account_id: s.account_id.to_string(),
            name: s.name,
            imo_number: s.imo_number,
            created_at: s.created_at.timestamp(),
            created_by: s.created_by.to_string(),
        }
    }
}
