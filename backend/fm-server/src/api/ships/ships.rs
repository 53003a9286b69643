//! Ship REST API handlers
//!
//! Listing and reading need any membership on the account; creating and
//! deleting need the `owner` role.

use crate::api::resolve::{find_account_ship, parse_id};
use crate::{
    AccountMember, AccountOwner, ApiError, ApiResult, AppState, CreateShipRequest,
    DeleteResponse, ShipDto, ShipListResponse, ShipResponse, ValidJson,
};

use fm_core::Ship;
use fm_db::ShipRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/accounts/{account_id}/ships
///
/// Ships of the account, ordered by name
pub async fn list_ships(
    member: AccountMember,
    State(state): State<AppState>,
) -> ApiResult<Json<ShipListResponse>> {
    let ships = ShipRepository::new(state.pool.clone())
        .find_by_account(member.account_id())
        .await?;

    Ok(Json(ShipListResponse {
        ships: ships.into_iter().map(ShipDto::from).collect(),
    }))
}

/// POST /api/accounts/{account_id}/ships
pub async fn create_ship(
    owner: AccountOwner,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateShipRequest>,
) -> ApiResult<(StatusCode, Json<ShipResponse>)> {
    let imo_number = req
        .imo_number
        .as_deref()
        .map(str::trim)
        .filter(|imo| !imo.is_empty());
    Ship::validate_fields(&req.name, imo_number)?;

    let ship = Ship::new(
        owner.account_id(),
        req.name.trim().to_string(),
        imo_number.map(str::to_string),
        owner.identity.id,
    );
    ShipRepository::new(state.pool.clone()).create(&ship).await?;

    log::info!(
        "User {} created ship {} on account {}",
        owner.identity.id,
        ship.id,
        ship.account_id
    );

    Ok((StatusCode::CREATED, Json(ShipResponse { ship: ship.into() })))
}

/// GET /api/accounts/{account_id}/ships/{ship_id}
pub async fn get_ship(
    member: AccountMember,
    State(state): State<AppState>,
    Path((_, ship_id)): Path<(String, String)>,
) -> ApiResult<Json<ShipResponse>> {
    let ship_id = parse_id(&ship_id, "ship_id")?;
    let ship = find_account_ship(&state.pool, member.account_id(), ship_id).await?;

    Ok(Json(ShipResponse { ship: ship.into() }))
}

/// DELETE /api/accounts/{account_id}/ships/{ship_id}
pub async fn delete_ship(
    owner: AccountOwner,
    State(state): State<AppState>,
    Path((_, ship_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let ship_id = parse_id(&ship_id, "ship_id")?;

    let deleted = ShipRepository::new(state.pool.clone())
        .delete(owner.account_id(), ship_id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("Ship {} not found", ship_id)));
    }

    log::info!(
        "User {} deleted ship {} on account {}",
        owner.identity.id,
        ship_id,
        owner.account_id()
    );

    Ok(Json(DeleteResponse {
        deleted_id: ship_id.to_string(),
    }))
}
