
use crate::{
    AuthError, Claims, Credential, IdentityProvider, MembershipStore, Result as AuthErrorResult,
};

use fm_core::{Identity, Membership};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

pub(crate) fn valid_claims(user_id: Uuid) -> Claims {
    Claims {
        sub: user_id.to_string(),
        email: Some("captain@example.com".to_string()),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

/// Identity provider returning a fixed answer, counting calls
pub(crate) struct StubIdentityProvider {
    answer: StubAnswer,
    pub(crate) calls: AtomicUsize,
}

pub(crate) enum StubAnswer {
    User(Identity),
    NoUser,
    Failure,
}

impl StubIdentityProvider {
    pub(crate) fn new(answer: StubAnswer) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn get_user(&self, _credential: &Credential) -> AuthErrorResult<Option<Identity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            StubAnswer::User(identity) => Ok(Some(identity.clone())),
            StubAnswer::NoUser => Ok(None),
            StubAnswer::Failure => Err(AuthError::ProviderUnavailable {
                message: "connection refused".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// In-memory membership relation keyed by (account_id, user_id)
#[derive(Default)]
pub(crate) struct InMemoryMemberships {
    rows: Mutex<HashMap<(Uuid, Uuid), Membership>>,
    pub(crate) fail: bool,
}

impl InMemoryMemberships {
    pub(crate) fn with(memberships: Vec<Membership>) -> Self {
        let rows = memberships
            .into_iter()
            .map(|m| ((m.account_id, m.user_id), m))
            .collect();
        Self {
            rows: Mutex::new(rows),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl MembershipStore for InMemoryMemberships {
    async fn find_membership(
        &self,
        account_id: Uuid,
        user_id: Uuid,
    ) -> AuthErrorResult<Option<Membership>> {
        if self.fail {
            return Err(AuthError::MembershipLookup {
                message: "no such table: accounts_memberships".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&(account_id, user_id))
            .cloned())
    }
}
