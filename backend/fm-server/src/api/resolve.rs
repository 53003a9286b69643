//! Identifier parsing and account-scoped lookups shared by handlers.

use crate::ApiError;

use fm_core::{FuelType, Ship};
use fm_db::{FuelTypeRepository, ShipRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Parse a UUID from a path segment or body field, naming the field on failure.
#[track_caller]
pub fn parse_id(value: &str, field: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value.trim()).map_err(|_| ApiError::Validation {
        message: format!("Invalid {}: '{}'", field, value),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Load a ship that belongs to `account_id`.
///
/// A ship owned by another account is reported exactly like a missing one,
/// so callers cannot discover ship ids outside their accounts.
pub async fn find_account_ship(
    pool: &SqlitePool,
    account_id: Uuid,
    ship_id: Uuid,
) -> Result<Ship, ApiError> {
    let ship = ShipRepository::new(pool.clone()).find_by_id(ship_id).await?;

    match ship {
        Some(ship) if ship.belongs_to(account_id) => Ok(ship),
        Some(_) => {
            log::debug!(
                "Ship {} requested through account {} it does not belong to",
                ship_id,
                account_id
            );
            Err(ApiError::not_found(format!("Ship {} not found", ship_id)))
        }
        None => Err(ApiError::not_found(format!("Ship {} not found", ship_id))),
    }
}

/// Load a catalog fuel type; unknown ids are a client error on `field`.
pub async fn find_fuel_type(
    pool: &SqlitePool,
    fuel_type_id: Uuid,
    field: &str,
) -> Result<FuelType, ApiError> {
    FuelTypeRepository::new(pool.clone())
        .find_by_id(fuel_type_id)
        .await?
        .ok_or_else(|| {
            ApiError::validation(format!("Unknown fuel type {}", fuel_type_id), field)
        })
}
