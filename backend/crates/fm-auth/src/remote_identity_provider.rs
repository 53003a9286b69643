//! Identity lookup against a hosted auth service.
//!
//! The service exposes `GET {base_url}/user`, authenticated with the user's
//! access token, returning `{ "id": "<uuid>", "email": "..." }`.

use crate::{AuthError, Credential, IdentityProvider, Result as AuthErrorResult};

use fm_core::Identity;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct RemoteUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

pub struct RemoteIdentityProvider {
    client: reqwest::Client,
    user_url: String,
    api_key: Option<String>,
}

impl RemoteIdentityProvider {
    #[track_caller]
    pub fn new(base_url: &str, api_key: Option<String>) -> AuthErrorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AuthError::ProviderUnavailable {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client,
            user_url: format!("{}/user", base_url.trim_end_matches('/')),
            api_key,
        })
    }

    pub fn user_url(&self) -> &str {
        &self.user_url
    }
}

#[async_trait]
impl IdentityProvider for RemoteIdentityProvider {
    async fn get_user(&self, credential: &Credential) -> AuthErrorResult<Option<Identity>> {
        let Some(token) = credential.token() else {
            return Ok(None);
        };

        let mut request = self.client.get(&self.user_url).bearer_auth(token);
        if let Some(ref api_key) = self.api_key {
            request = request.header("apikey", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable {
                message: format!("Request to identity provider failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!("Identity provider rejected {} credential", credential.kind());
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AuthError::ProviderUnavailable {
                message: format!("Identity provider returned {}", status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let user: RemoteUser =
            response
                .json()
                .await
                .map_err(|e| AuthError::ProviderUnavailable {
                    message: format!("Invalid identity provider response: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(Some(Identity::new(user.id, user.email)))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
