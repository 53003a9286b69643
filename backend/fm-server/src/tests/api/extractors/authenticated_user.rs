use crate::AuthenticatedUser;
use crate::tests::{TEST_COOKIE, create_test_state, create_test_token};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn given_bearer_token_when_extracting_then_identity_from_claims() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", create_test_token(user_id)))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    let AuthenticatedUser(identity) = result.unwrap();
    assert_eq!(identity.id, user_id);
    assert_eq!(identity.email.as_deref(), Some("officer@example.com"));
}

#[tokio::test]
async fn given_session_cookie_when_extracting_then_identity_resolved() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let request = Request::builder()
        .header(
            "Cookie",
            format!("theme=dark; {}={}", TEST_COOKIE, create_test_token(user_id)),
        )
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0.id, user_id);
}

#[tokio::test]
async fn given_no_credentials_when_extracting_then_401() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.err().unwrap().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_token_signed_with_other_secret_when_extracting_then_401() {
    let state = create_test_state().await;
    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &fm_auth::Claims {
            sub: Uuid::new_v4().to_string(),
            email: None,
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
        },
        &jsonwebtoken::EncodingKey::from_secret(b"some-other-secret-of-32-bytes-or-more"),
    )
    .unwrap();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", forged))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.err().unwrap().status(), StatusCode::UNAUTHORIZED);
}
