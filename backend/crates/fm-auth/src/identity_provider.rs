use crate::{Credential, Result as AuthErrorResult};

use fm_core::Identity;

use async_trait::async_trait;

/// Exchanges a credential for the user it belongs to.
///
/// `Ok(None)` means the credential does not identify anyone (missing,
/// malformed, expired or revoked). `Err` means the provider itself failed.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn get_user(&self, credential: &Credential) -> AuthErrorResult<Option<Identity>>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
