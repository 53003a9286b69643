use crate::{AccountMember, ApiResult, AppState, MemberListResponse, MembershipDto};

use fm_db::MembershipRepository;

use axum::{Json, extract::State};

/// GET /api/accounts/{account_id}/members
pub async fn list_members(
    member: AccountMember,
    State(state): State<AppState>,
) -> ApiResult<Json<MemberListResponse>> {
    let members = MembershipRepository::new(state.pool.clone())
        .find_by_account(member.account_id())
        .await?;

    Ok(Json(MemberListResponse {
        members: members.into_iter().map(MembershipDto::from).collect(),
    }))
}
