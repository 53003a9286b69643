//! Request authorization: credential resolution, identity lookup and the
//! account access gate shared by every API route.
//!
//! Each request ends in exactly one of three states:
//! - unauthenticated: no identity could be resolved
//! - forbidden: identity resolved, but no membership or the wrong role
//! - authorized: the handler proceeds
//!
//! Nothing is cached between requests.

use crate::{AuthError, Credential, IdentityProvider, MembershipStore, Result as AuthErrorResult};

use fm_core::{Identity, Membership, Role};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use http::HeaderMap;
use log::{debug, warn};
use uuid::Uuid;

pub struct RequestAuthorizer {
    identity_provider: Arc<dyn IdentityProvider>,
    memberships: Arc<dyn MembershipStore>,
    session_cookie: String,
}

impl RequestAuthorizer {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        memberships: Arc<dyn MembershipStore>,
        session_cookie: impl Into<String>,
    ) -> Self {
        Self {
            identity_provider,
            memberships,
            session_cookie: session_cookie.into(),
        }
    }

    pub fn identity_provider_name(&self) -> &'static str {
        self.identity_provider.name()
    }

    pub fn resolve_credential(&self, headers: &HeaderMap) -> Credential {
        Credential::from_headers(headers, &self.session_cookie)
    }

    /// Resolve the caller's identity.
    ///
    /// Missing credentials, rejected credentials and provider failures all
    /// yield `AuthError::Unauthenticated`. Provider failures are logged.
    pub async fn resolve_identity(&self, headers: &HeaderMap) -> AuthErrorResult<Identity> {
        let credential = self.resolve_credential(headers);
        if !credential.is_present() {
            return Err(AuthError::Unauthenticated {
                reason: "no credential presented".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match self.identity_provider.get_user(&credential).await {
            Ok(Some(identity)) => {
                debug!(
                    "Resolved user {} from {} credential",
                    identity.id,
                    credential.kind()
                );
                Ok(identity)
            }
            Ok(None) => Err(AuthError::Unauthenticated {
                reason: format!("{} credential not accepted", credential.kind()),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => {
                warn!(
                    "Identity provider '{}' failed: {}",
                    self.identity_provider.name(),
                    e
                );
                Err(AuthError::Unauthenticated {
                    reason: "identity provider lookup failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Verify `identity` is a member of `account_id`, and when `required_role`
    /// is given, that its role is exactly that role.
    pub async fn require_account_access(
        &self,
        identity: &Identity,
        account_id: Uuid,
        required_role: Option<Role>,
    ) -> AuthErrorResult<Membership> {
        let membership = self
            .memberships
            .find_membership(account_id, identity.id)
            .await?;

        match (membership, required_role) {
            (None, _) => {
                debug!("User {} has no membership on {}", identity.id, account_id);
                Err(AuthError::NotAMember {
                    account_id,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            (Some(m), Some(required)) if m.role != required => {
                debug!(
                    "User {} has role {} on {}, {} required",
                    identity.id, m.role, account_id, required
                );
                Err(AuthError::RoleMismatch {
                    account_id,
                    required,
                    actual: m.role,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            (Some(m), _) => Ok(m),
        }
    }
}
