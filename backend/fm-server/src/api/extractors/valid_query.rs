//! Query string extractor with API-shaped rejections

use crate::ApiError;

use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like `axum::extract::Query`, but unparsable query strings (duplicated or
/// mistyped parameters) become a 400 `{"error": ...}` response.
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ValidQuery(value)),
            Err(rejection) => Err(ApiError::BadRequest {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
