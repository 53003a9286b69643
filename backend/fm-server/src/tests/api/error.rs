use crate::ApiError;

use fm_auth::AuthError;
use fm_core::{CoreError, Role};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_unauthorized_error_when_rendered_then_401_with_fixed_message() {
    let (status, json) = body_json(ApiError::Unauthorized {
        reason: "token expired".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json, serde_json::json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn given_forbidden_error_when_rendered_then_403_without_reason() {
    let (status, json) = body_json(ApiError::Forbidden {
        reason: "not a member of account".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json, serde_json::json!({ "error": "Forbidden" }));
}

#[tokio::test]
async fn given_not_found_error_when_rendered_then_404_with_message() {
    let (status, json) = body_json(ApiError::not_found("Ship not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Ship not found");
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Ship name is required", "name")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Ship name is required");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500_hides_details() {
    let (status, json) = body_json(ApiError::Internal {
        message: "disk I/O error on /var/lib/fm.db".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}

#[test]
fn given_auth_errors_when_converted_then_status_follows_failure_class() {
    let unauthenticated = ApiError::from(AuthError::Unauthenticated {
        reason: "no credential presented".into(),
        location: ErrorLocation::from(Location::caller()),
    });
    let not_member = ApiError::from(AuthError::NotAMember {
        account_id: Uuid::new_v4(),
        location: ErrorLocation::from(Location::caller()),
    });
    let wrong_role = ApiError::from(AuthError::RoleMismatch {
        account_id: Uuid::new_v4(),
        required: Role::Owner,
        actual: Role::Member,
        location: ErrorLocation::from(Location::caller()),
    });
    let lookup_failed = ApiError::from(AuthError::MembershipLookup {
        message: "pool closed".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(not_member.status(), StatusCode::FORBIDDEN);
    assert_eq!(wrong_role.status(), StatusCode::FORBIDDEN);
    assert_eq!(lookup_failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn given_core_validation_error_when_converted_then_field_is_kept() {
    let error = ApiError::from(CoreError::Validation {
        message: "volume_m3 cannot be negative".into(),
        field: Some("volume_m3".into()),
        location: ErrorLocation::from(Location::caller()),
    });

    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("volume_m3")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn given_uuid_error_when_converted_then_validation() {
    let uuid_err = Uuid::parse_str("not-a-uuid").unwrap_err();
    let error: ApiError = uuid_err.into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_payload_too_large_error_when_rendered_then_413_json() {
    let (status, json) = body_json(ApiError::PayloadTooLarge {
        message: "length limit exceeded".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"], "length limit exceeded");
}
