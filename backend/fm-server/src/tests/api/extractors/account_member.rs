use crate::tests::{create_account_with_member, create_test_state, create_test_token};
use crate::{AccountMember, AccountOwner, AppState};

use fm_core::Role;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

async fn member_role(member: AccountMember) -> String {
    member.membership.role.as_str().to_string()
}

async fn owner_account(owner: AccountOwner) -> String {
    owner.account_id().to_string()
}

/// The extractors read `{account_id}` from the matched route, so they are
/// exercised through a router rather than bare request parts.
fn gated_router(state: AppState) -> Router {
    Router::new()
        .route("/accounts/{account_id}/member", get(member_role))
        .route("/accounts/{account_id}/owner", get(owner_account))
        .with_state(state)
}

async fn call(app: Router, uri: String, token: Option<String>) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn given_member_when_extracting_member_then_membership_returned() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let account_id = create_account_with_member(&state.pool, user_id, Role::Member).await;

    let (status, body) = call(
        gated_router(state),
        format!("/accounts/{}/member", account_id),
        Some(create_test_token(user_id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "member");
}

#[tokio::test]
async fn given_member_when_extracting_owner_then_403() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let account_id = create_account_with_member(&state.pool, user_id, Role::Member).await;

    let (status, _) = call(
        gated_router(state),
        format!("/accounts/{}/owner", account_id),
        Some(create_test_token(user_id)),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn given_owner_when_extracting_owner_then_account_id_returned() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let account_id = create_account_with_member(&state.pool, user_id, Role::Owner).await;

    let (status, body) = call(
        gated_router(state),
        format!("/accounts/{}/owner", account_id),
        Some(create_test_token(user_id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, account_id.to_string());
}

#[tokio::test]
async fn given_non_member_when_extracting_member_then_403() {
    let state = create_test_state().await;
    let owner_id = Uuid::new_v4();
    let account_id = create_account_with_member(&state.pool, owner_id, Role::Owner).await;

    let (status, body) = call(
        gated_router(state),
        format!("/accounts/{}/member", account_id),
        Some(create_test_token(Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, r#"{"error":"Forbidden"}"#);
}

#[tokio::test]
async fn given_anonymous_request_with_bad_account_id_when_extracting_then_401_first() {
    let state = create_test_state().await;

    let (status, body) = call(
        gated_router(state),
        "/accounts/not-a-uuid/member".to_string(),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, r#"{"error":"Unauthorized"}"#);
}

#[tokio::test]
async fn given_signed_in_user_with_bad_account_id_when_extracting_then_400() {
    let state = create_test_state().await;

    let (status, _) = call(
        gated_router(state),
        "/accounts/not-a-uuid/member".to_string(),
        Some(create_test_token(Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
