//! Axum extractor for the caller's identity

use crate::{ApiError, AppState};

use fm_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The identity behind the request's bearer token or session cookie.
///
/// Rejects with 401 before any path or body extraction runs, so anonymous
/// requests never reach body parsing.
pub struct AuthenticatedUser(pub Identity);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let identity = state.authorizer.resolve_identity(&parts.headers).await?;
            Ok(AuthenticatedUser(identity))
        }
    }
}
