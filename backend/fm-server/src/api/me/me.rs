use crate::{ApiResult, AppState, AuthenticatedUser, MeResponse, MembershipDto};

use fm_db::MembershipRepository;

use axum::{Json, extract::State};

/// GET /api/me
pub async fn get_me(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
) -> ApiResult<Json<MeResponse>> {
    let memberships = MembershipRepository::new(state.pool.clone())
        .find_by_user(identity.id)
        .await?;

    Ok(Json(MeResponse {
        user: identity.into(),
        memberships: memberships.into_iter().map(MembershipDto::from).collect(),
    }))
}
