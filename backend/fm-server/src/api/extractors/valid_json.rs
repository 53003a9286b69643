//! JSON body extractor with API-shaped rejections

use crate::ApiError;

use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but malformed or mistyped bodies become a 400
/// `{"error": ...}` response instead of axum's plain-text rejection.
/// Bodies over the configured limit keep their 413.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(ApiError::PayloadTooLarge {
                    message: rejection.body_text(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(rejection) => Err(ApiError::BadRequest {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
