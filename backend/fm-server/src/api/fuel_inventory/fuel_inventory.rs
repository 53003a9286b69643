//! Fuel inventory REST API handlers

use crate::api::resolve::{find_account_ship, find_fuel_type, parse_id};
use crate::{
    AccountMember, ApiError, ApiResult, AppState, AuthenticatedUser, CalculateAndSaveRequest,
    FuelInventoryDto, FuelInventoryListResponse, FuelInventoryResponse, FuelTypeDto,
    FuelTypeListResponse, ValidJson,
};

use fm_core::{FuelInventoryRecord, FuelReading, calculate_mass};
use fm_db::{FuelInventoryRepository, FuelTypeRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /api/fuel-inventory/fuel-types
///
/// Global catalog; any signed-in user may read it.
pub async fn list_fuel_types(
    AuthenticatedUser(_identity): AuthenticatedUser,
    State(state): State<AppState>,
) -> ApiResult<Json<FuelTypeListResponse>> {
    let fuel_types = FuelTypeRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(FuelTypeListResponse {
        fuel_types: fuel_types.into_iter().map(FuelTypeDto::from).collect(),
    }))
}

/// POST /api/fuel-inventory/calculate-and-save
///
/// Converts a tank reading to mass and stores it against the ship.
pub async fn calculate_and_save(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CalculateAndSaveRequest>,
) -> ApiResult<(StatusCode, Json<FuelInventoryResponse>)> {
    // 1. Account gate: membership on the account named in the body
    let account_id = parse_id(&req.account_id, "account_id")?;
    state
        .authorizer
        .require_account_access(&identity, account_id, None)
        .await?;

    // 2. Ship must belong to that account
    let ship_id = parse_id(&req.ship_id, "ship_id")?;
    let ship = find_account_ship(&state.pool, account_id, ship_id).await?;

    // 3. Density falls back to the catalog reference
    let fuel_type_id = parse_id(&req.fuel_type_id, "fuel_type_id")?;
    let fuel_type = find_fuel_type(&state.pool, fuel_type_id, "fuel_type_id").await?;
    let density = req
        .density_kg_m3
        .unwrap_or(fuel_type.reference_density_kg_m3);

    let reading = FuelReading {
        volume_m3: req.volume_m3,
        density_15c_kg_m3: density,
        temperature_c: req.temperature_c,
    };
    let mass_mt = calculate_mass(&reading)?;

    let recorded_at = resolve_timestamp(req.recorded_at, "recorded_at")?;

    let record = FuelInventoryRecord {
        id: Uuid::new_v4(),
        account_id,
        ship_id: ship.id,
        fuel_type_id: fuel_type.id,
        volume_m3: reading.volume_m3,
        density_kg_m3: reading.density_15c_kg_m3,
        temperature_c: reading.temperature_c,
        mass_mt,
        recorded_at,
        created_by: identity.id,
    };
    FuelInventoryRepository::new(state.pool.clone())
        .create(&record)
        .await?;

    log::info!(
        "Recorded {} mt of {} on ship {} (account {})",
        mass_mt,
        fuel_type.code,
        ship.id,
        account_id
    );

    Ok((
        StatusCode::CREATED,
        Json(FuelInventoryResponse {
            record: record.into(),
        }),
    ))
}

/// GET /api/accounts/{account_id}/ships/{ship_id}/fuel-inventory
///
/// Newest first
pub async fn list_ship_inventory(
    member: AccountMember,
    State(state): State<AppState>,
    Path((_, ship_id)): Path<(String, String)>,
) -> ApiResult<Json<FuelInventoryListResponse>> {
    let ship_id = parse_id(&ship_id, "ship_id")?;
    let ship = find_account_ship(&state.pool, member.account_id(), ship_id).await?;

    let records = FuelInventoryRepository::new(state.pool.clone())
        .find_by_ship(member.account_id(), ship.id)
        .await?;

    Ok(Json(FuelInventoryListResponse {
        records: records.into_iter().map(FuelInventoryDto::from).collect(),
    }))
}

/// Unix seconds from a request, or now.
#[track_caller]
pub(crate) fn resolve_timestamp(
    value: Option<i64>,
    field: &str,
) -> Result<DateTime<Utc>, ApiError> {
    match value {
        None => Ok(Utc::now()),
        Some(secs) => DateTime::from_timestamp(secs, 0).ok_or_else(|| ApiError::Validation {
            message: format!("Invalid {} timestamp: {}", field, secs),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
