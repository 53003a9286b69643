//! Column decoding shared by the repositories.
//!
//! UUIDs are stored as TEXT and timestamps as INTEGER unix seconds.

use crate::{DbError, Result as DbErrorResult};

use fm_core::Role;

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_role(value: &str, column: &str) -> DbErrorResult<Role> {
    Role::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid Role in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
