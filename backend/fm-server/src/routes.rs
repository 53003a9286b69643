use crate::{
    AppState, calculate_and_save, create_fuel_quality, create_ship, delete_ship, get_me, get_ship,
    health, list_fuel_quality, list_fuel_types, list_members, list_price_predictions,
    list_ship_inventory, list_ships,
};

use fm_config::ServerConfig;

use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower::ServiceBuilder;
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/me", get(get_me))
        .route("/fuel-inventory/fuel-types", get(list_fuel_types))
        .route(
            "/fuel-inventory/calculate-and-save",
            post(calculate_and_save),
        )
        .route("/accounts/{account_id}/members", get(list_members))
        .route(
            "/accounts/{account_id}/ships",
            get(list_ships).post(create_ship),
        )
        .route(
            "/accounts/{account_id}/ships/{ship_id}",
            get(get_ship).delete(delete_ship),
        )
        .route(
            "/accounts/{account_id}/ships/{ship_id}/fuel-inventory",
            get(list_ship_inventory),
        )
        .route(
            "/accounts/{account_id}/fuel-quality",
            get(list_fuel_quality).post(create_fuel_quality),
        )
        .route(
            "/accounts/{account_id}/price-predictions",
            get(list_price_predictions),
        );

    Router::new()
        .nest("/api", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                ))),
        )
        .layer(cors_layer(&server.cors_origins))
}

/// Any origin when none are configured. Explicit origins also allow
/// credentials so the session cookie is sent cross-origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<Elapsed>() {
        log::warn!("Request timed out");
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "Request timed out" })),
        )
            .into_response();
    }

    log::error!("Unhandled middleware error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
