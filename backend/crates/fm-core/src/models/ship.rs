use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_SHIP_NAME_LENGTH: usize = 120;

/// A vessel belonging to exactly one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    /// IMO ship identification number (7 digits)
    pub imo_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Ship {
    pub fn new(
        account_id: Uuid,
        name: String,
        imo_number: Option<String>,
        created_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            name,
            imo_number,
            created_at: Utc::now(),
            created_by,
        }
    }

    pub fn belongs_to(&self, account_id: Uuid) -> bool {
        self.account_id == account_id
    }

    /// Validate a ship name and optional IMO number before creation.
    #[track_caller]
    pub fn validate_fields(name: &str, imo_number: Option<&str>) -> CoreErrorResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation {
                message: "Ship name is required".to_string(),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if trimmed.chars().count() > MAX_SHIP_NAME_LENGTH {
            return Err(CoreError::Validation {
                message: format!("Ship name exceeds {} characters", MAX_SHIP_NAME_LENGTH),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(imo) = imo_number
            && (imo.len() != 7 || !imo.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(CoreError::Validation {
                message: format!("IMO number must be 7 digits, got '{}'", imo),
                field: Some("imo_number".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
