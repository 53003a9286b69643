use crate::{
    AccountMember, ApiError, ApiResult, AppState, ListPricePredictionsQuery, PricePredictionDto,
    PricePredictionListResponse, ValidQuery,
};

use fm_db::{FuelTypeRepository, PricePredictionRepository};

use axum::{Json, extract::State};

/// GET /api/accounts/{account_id}/price-predictions
///
/// Ordered by prediction date. `fuel_type` is a catalog code (unknown codes
/// are a 400), `port` is matched case-insensitively; blank filters are ignored.
pub async fn list_price_predictions(
    member: AccountMember,
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListPricePredictionsQuery>,
) -> ApiResult<Json<PricePredictionListResponse>> {
    let fuel_type = query
        .fuel_type
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase);
    let port = query
        .port
        .as_deref()
        .map(str::trim)
        .filter(|port| !port.is_empty());

    if let Some(ref code) = fuel_type {
        FuelTypeRepository::new(state.pool.clone())
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                ApiError::validation(format!("Unknown fuel type '{}'", code), "fuel_type")
            })?;
    }

    let predictions = PricePredictionRepository::new(state.pool.clone())
        .find_by_account(member.account_id(), fuel_type.as_deref(), port)
        .await?;

    Ok(Json(PricePredictionListResponse {
        predictions: predictions
            .into_iter()
            .map(PricePredictionDto::from)
            .collect(),
    }))
}
