//! Builds the request authorizer from configuration.

use crate::error::{Result as ServerErrorResult, ServerError};

use fm_auth::{
    IdentityProvider, JwtAlgorithm, JwtIdentityProvider, JwtValidator, RemoteIdentityProvider,
    RequestAuthorizer,
};
use fm_config::{AuthProvider, Config, ConfigError};
use fm_db::MembershipRepository;

use std::sync::Arc;

use log::info;
use sqlx::SqlitePool;

pub fn build_identity_provider(config: &Config) -> ServerErrorResult<Arc<dyn IdentityProvider>> {
    match config.auth.provider {
        AuthProvider::Jwt => {
            let validator = build_jwt_validator(config)?;
            info!("Identity provider: jwt ({})", validator.algorithm());
            Ok(Arc::new(JwtIdentityProvider::new(validator)))
        }
        AuthProvider::Remote => {
            let url = config.auth.remote_url.as_deref().ok_or_else(|| {
                ConfigError::auth("auth.provider = \"remote\" requires auth.remote_url")
            })?;
            let provider = RemoteIdentityProvider::new(url, config.auth.remote_api_key.clone())?;
            info!("Identity provider: remote ({})", provider.user_url());
            Ok(Arc::new(provider))
        }
    }
}

fn build_jwt_validator(config: &Config) -> ServerErrorResult<JwtValidator> {
    let algorithm = jwt_algorithm(config)?;
    let validator = JwtValidator::from_algorithm(&algorithm)?;

    Ok(match config.auth.jwt_audience {
        Some(ref audience) => validator.with_audience(audience),
        None => validator,
    })
}

/// HS256 when a shared secret is configured, else RS256 from the key file.
pub fn jwt_algorithm(config: &Config) -> ServerErrorResult<JwtAlgorithm> {
    if let Some(ref secret) = config.auth.jwt_secret {
        return Ok(JwtAlgorithm::HS256 {
            secret: secret.as_bytes().to_vec(),
        });
    }

    match config.jwt_public_key_path()? {
        Some(full_path) => {
            let public_key_pem =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            Ok(JwtAlgorithm::RS256 { public_key_pem })
        }
        None => Err(ConfigError::auth(
            "auth.provider = \"jwt\" requires auth.jwt_secret or auth.jwt_public_key_path",
        )
        .into()),
    }
}

/// Memberships are read from the application database.
pub fn build_authorizer(config: &Config, pool: SqlitePool) -> ServerErrorResult<RequestAuthorizer> {
    let identity_provider = build_identity_provider(config)?;
    let memberships = Arc::new(MembershipRepository::new(pool));

    Ok(RequestAuthorizer::new(
        identity_provider,
        memberships,
        config.auth.session_cookie.clone(),
    ))
}
