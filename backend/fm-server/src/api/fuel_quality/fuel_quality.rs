//! Fuel quality REST API handlers

use crate::api::fuel_inventory::fuel_inventory::resolve_timestamp;
use crate::api::resolve::{find_account_ship, find_fuel_type, parse_id};
use crate::{
    AccountMember, ApiError, ApiResult, AppState, CreateFuelQualityRequest, FuelQualityDto,
    FuelQualityListResponse, FuelQualityResponse, ListFuelQualityQuery, ValidJson, ValidQuery,
};

use fm_core::FuelQualityRecord;
use fm_db::FuelQualityRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use uuid::Uuid;

const MAX_PERCENT: f64 = 100.0;

/// GET /api/accounts/{account_id}/fuel-quality
///
/// Newest first, optionally for a single ship
pub async fn list_fuel_quality(
    member: AccountMember,
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListFuelQualityQuery>,
) -> ApiResult<Json<FuelQualityListResponse>> {
    let ship_id = query
        .ship_id
        .as_deref()
        .map(|id| parse_id(id, "ship_id"))
        .transpose()?;

    let samples = FuelQualityRepository::new(state.pool.clone())
        .find_by_account(member.account_id(), ship_id)
        .await?;

    Ok(Json(FuelQualityListResponse {
        samples: samples.into_iter().map(FuelQualityDto::from).collect(),
    }))
}

/// POST /api/accounts/{account_id}/fuel-quality
pub async fn create_fuel_quality(
    member: AccountMember,
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateFuelQualityRequest>,
) -> ApiResult<(StatusCode, Json<FuelQualityResponse>)> {
    let account_id = member.account_id();

    let ship_id = parse_id(&req.ship_id, "ship_id")?;
    let ship = find_account_ship(&state.pool, account_id, ship_id).await?;

    let fuel_type_id = parse_id(&req.fuel_type_id, "fuel_type_id")?;
    let fuel_type = find_fuel_type(&state.pool, fuel_type_id, "fuel_type_id").await?;

    validate_sample(&req)?;
    let sampled_at = resolve_timestamp(req.sampled_at, "sampled_at")?;

    let record = FuelQualityRecord {
        id: Uuid::new_v4(),
        account_id,
        ship_id: ship.id,
        fuel_type_id: fuel_type.id,
        density_15c_kg_m3: req.density_15c_kg_m3,
        viscosity_cst: req.viscosity_cst,
        sulphur_pct: req.sulphur_pct,
        water_pct: req.water_pct,
        sampled_at,
        created_by: member.identity.id,
    };
    FuelQualityRepository::new(state.pool.clone())
        .create(&record)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FuelQualityResponse {
            sample: record.into(),
        }),
    ))
}

fn validate_sample(req: &CreateFuelQualityRequest) -> Result<(), ApiError> {
    if !req.density_15c_kg_m3.is_finite() || req.density_15c_kg_m3 <= 0.0 {
        return Err(ApiError::validation(
            "density_15c_kg_m3 must be positive",
            "density_15c_kg_m3",
        ));
    }

    if let Some(viscosity) = req.viscosity_cst
        && (!viscosity.is_finite() || viscosity < 0.0)
    {
        return Err(ApiError::validation(
            "viscosity_cst cannot be negative",
            "viscosity_cst",
        ));
    }

    for (value, field) in [
        (req.sulphur_pct, "sulphur_pct"),
        (req.water_pct, "water_pct"),
    ] {
        if let Some(pct) = value
            && !(0.0..=MAX_PERCENT).contains(&pct)
        {
            return Err(ApiError::validation(
                format!("{} must be between 0 and {}", field, MAX_PERCENT),
                field,
            ));
        }
    }

    Ok(())
}
