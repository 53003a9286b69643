mod api;

use crate::AppState;

use fm_auth::{Claims, JwtIdentityProvider, JwtValidator, RequestAuthorizer};
use fm_core::{Account, Membership, Role};
use fm_db::{AccountRepository, MembershipRepository};

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-at-least-32-bytes!";
pub(crate) const TEST_COOKIE: &str = "fm-session";

pub(crate) async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test pool");

    fm_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) async fn create_test_state() -> AppState {
    let pool = create_test_pool().await;
    let provider = JwtIdentityProvider::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes()));
    let authorizer = RequestAuthorizer::new(
        Arc::new(provider),
        Arc::new(MembershipRepository::new(pool.clone())),
        TEST_COOKIE,
    );

    AppState::new(pool, Arc::new(authorizer))
}

pub(crate) fn create_test_token(user_id: Uuid) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: Some("officer@example.com".to_string()),
        exp: now + 3600,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Team account with `user_id` holding `role`
pub(crate) async fn create_account_with_member(
    pool: &SqlitePool,
    user_id: Uuid,
    role: Role,
) -> Uuid {
    let account = Account::new_team("Test Fleet".to_string(), format!("fleet-{}", Uuid::new_v4()));
    AccountRepository::new(pool.clone())
        .create(&account)
        .await
        .unwrap();
    MembershipRepository::new(pool.clone())
        .create(&Membership::new(account.id, user_id, role))
        .await
        .unwrap();
    account.id
}
