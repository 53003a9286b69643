//! Axum extractors gating `/accounts/{account_id}/...` routes

use crate::api::resolve::parse_id;
use crate::{ApiError, AppState};

use fm_core::{Identity, Membership, Role};

use std::collections::HashMap;
use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use error_location::ErrorLocation;
use uuid::Uuid;

const ACCOUNT_ID_PARAM: &str = "account_id";

/// Caller with any membership on the account in the path.
pub struct AccountMember {
    pub identity: Identity,
    pub membership: Membership,
}

impl AccountMember {
    pub fn account_id(&self) -> Uuid {
        self.membership.account_id
    }
}

/// Caller whose role on the account in the path is exactly `owner`.
pub struct AccountOwner {
    pub identity: Identity,
    pub membership: Membership,
}

impl AccountOwner {
    pub fn account_id(&self) -> Uuid {
        self.membership.account_id
    }
}

impl FromRequestParts<AppState> for AccountMember {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let (identity, membership) = authorize_account(parts, state, None).await?;
            Ok(AccountMember {
                identity,
                membership,
            })
        }
    }
}

impl FromRequestParts<AppState> for AccountOwner {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let (identity, membership) =
                authorize_account(parts, state, Some(Role::Owner)).await?;
            Ok(AccountOwner {
                identity,
                membership,
            })
        }
    }
}

/// Identity first (401), then the path account id (400), then membership (403).
async fn authorize_account(
    parts: &mut Parts,
    state: &AppState,
    required_role: Option<Role>,
) -> Result<(Identity, Membership), ApiError> {
    let identity = state.authorizer.resolve_identity(&parts.headers).await?;

    let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let raw_account_id = params.get(ACCOUNT_ID_PARAM).ok_or_else(|| ApiError::Internal {
        message: format!("Route is missing the {{{}}} parameter", ACCOUNT_ID_PARAM),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let account_id = parse_id(raw_account_id, ACCOUNT_ID_PARAM)?;

    let membership = state
        .authorizer
        .require_account_access(&identity, account_id, required_role)
        .await?;

    Ok((identity, membership))
}
