use crate::{Credential, IdentityProvider, JwtValidator, Result as AuthErrorResult};

use fm_core::Identity;

use async_trait::async_trait;
use log::debug;

/// Stateless identity lookup: the credential is a signed JWT issued by the
/// identity provider, verified locally.
///
/// Bearer tokens and session cookies carry the same access token, so both
/// are verified the same way.
pub struct JwtIdentityProvider {
    validator: JwtValidator,
}

impl JwtIdentityProvider {
    pub fn new(validator: JwtValidator) -> Self {
        Self { validator }
    }

    pub fn algorithm(&self) -> &str {
        self.validator.algorithm()
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn get_user(&self, credential: &Credential) -> AuthErrorResult<Option<Identity>> {
        let Some(token) = credential.token() else {
            return Ok(None);
        };

        match self.validator.validate(token) {
            Ok(claims) => {
                let user_id = claims.user_id()?;
                Ok(Some(Identity::new(user_id, claims.email)))
            }
            Err(e) => {
                debug!("Rejected {} credential: {}", credential.kind(), e);
                Ok(None)
            }
        }
    }

    fn name(&self) -> &'static str {
        "jwt"
    }
}
