use crate::Result as AuthErrorResult;

use fm_core::Membership;

use async_trait::async_trait;
use uuid::Uuid;

/// Read access to the account membership relation.
///
/// Implementations report datastore failures as `AuthError::MembershipLookup`.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    async fn find_membership(
        &self,
        account_id: Uuid,
        user_id: Uuid,
    ) -> AuthErrorResult<Option<Membership>>;
}
