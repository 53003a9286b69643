#![allow(dead_code)]

//! Test infrastructure for fm-server API tests

use fm_auth::{Claims, JwtIdentityProvider, JwtValidator, RequestAuthorizer};
use fm_config::ServerConfig;
use fm_core::{Account, Membership, PricePrediction, Role, Ship};
use fm_db::{AccountRepository, MembershipRepository, PricePredictionRepository, ShipRepository};
use fm_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret-32-bytes!!";
pub const SESSION_COOKIE: &str = "fm-session";
pub const HFO_ID: &str = "6f1c2a10-0000-4000-8000-000000000001";
pub const VLSFO_ID: &str = "6f1c2a10-0000-4000-8000-000000000005";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test database");

    fm_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, authenticating HS256 tokens signed with `TEST_SECRET`
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let provider = JwtIdentityProvider::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes()));
    let authorizer = RequestAuthorizer::new(
        Arc::new(provider),
        Arc::new(MembershipRepository::new(pool.clone())),
        SESSION_COOKIE,
    );

    AppState::new(pool, Arc::new(authorizer))
}

pub fn test_router(state: AppState) -> Router {
    build_router(state, &ServerConfig::default())
}

/// Mint an access token for `user_id`
pub fn create_test_token(user_id: Uuid) -> String {
    let now = Utc::now().timestamp();
    sign(Claims {
        sub: user_id.to_string(),
        email: Some(format!("{}@fleet.test", user_id.simple())),
        exp: now + 3600,
        iat: now,
    })
}

pub fn create_expired_token(user_id: Uuid) -> String {
    let now = Utc::now().timestamp();
    sign(Claims {
        sub: user_id.to_string(),
        email: None,
        exp: now - 3600,
        iat: now - 7200,
    })
}

fn sign(claims: Claims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to sign token")
}

/// Create a team account
pub async fn create_test_account(pool: &SqlitePool) -> Uuid {
    let account = Account::new_team(
        "Northern Tankers".to_string(),
        format!("northern-{}", Uuid::new_v4().simple()),
    );
    AccountRepository::new(pool.clone())
        .create(&account)
        .await
        .expect("Failed to create test account");
    account.id
}

pub async fn add_test_member(pool: &SqlitePool, account_id: Uuid, user_id: Uuid, role: Role) {
    MembershipRepository::new(pool.clone())
        .create(&Membership::new(account_id, user_id, role))
        .await
        .expect("Failed to create test membership");
}

/// Create an account owned by `user_id`
pub async fn create_owned_account(pool: &SqlitePool, user_id: Uuid) -> Uuid {
    let account_id = create_test_account(pool).await;
    add_test_member(pool, account_id, user_id, Role::Owner).await;
    account_id
}

pub async fn create_test_ship(pool: &SqlitePool, account_id: Uuid, name: &str) -> Uuid {
    let ship = Ship::new(
        account_id,
        name.to_string(),
        Some("9321483".to_string()),
        Uuid::new_v4(),
    );
    ShipRepository::new(pool.clone())
        .create(&ship)
        .await
        .expect("Failed to create test ship");
    ship.id
}

pub async fn create_test_prediction(
    pool: &SqlitePool,
    account_id: Uuid,
    fuel_type_id: &str,
    port: &str,
    date: NaiveDate,
) {
    let prediction = PricePrediction {
        id: Uuid::new_v4(),
        account_id,
        fuel_type_id: Uuid::parse_str(fuel_type_id).expect("Invalid fuel type id"),
        port: port.to_string(),
        predicted_price_usd_mt: 598.0,
        prediction_date: date,
        created_at: Utc::now(),
    };
    PricePredictionRepository::new(pool.clone())
        .create(&prediction)
        .await
        .expect("Failed to create test prediction");
}

pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn bearer_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and decode the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
