use crate::{
    AuthProvider, ConfigError, ConfigErrorResult, DEFAULT_SESSION_COOKIE, MIN_JWT_SECRET_LENGTH,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub provider: AuthProvider,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    pub jwt_audience: Option<String>,
    /// Cookie carrying the session token when no bearer header is sent
    pub session_cookie: String,
    pub remote_url: Option<String>,
    pub remote_api_key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: AuthProvider::default(),
            jwt_secret: None,
            jwt_public_key_path: None,
            jwt_audience: None,
            session_cookie: String::from(DEFAULT_SESSION_COOKIE),
            remote_url: None,
            remote_api_key: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        self.validate_session_cookie()?;

        match self.provider {
            AuthProvider::Jwt => self.validate_jwt(config_dir),
            AuthProvider::Remote => self.validate_remote(),
        }
    }

    /// Absolute path of the RS256 public key, if one is configured.
    pub fn public_key_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.jwt_public_key_path
            .as_ref()
            .map(|path| config_dir.join(path))
    }

    /// Signing algorithm label for logs.
    pub fn jwt_algorithm_name(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }

    fn validate_session_cookie(&self) -> ConfigErrorResult<()> {
        let name = self.session_cookie.as_str();
        if name.is_empty() {
            return Err(ConfigError::auth("auth.session_cookie cannot be empty"));
        }
        if name
            .chars()
            .any(|c| c == ';' || c == '=' || c == ',' || c.is_whitespace() || c.is_control())
        {
            return Err(ConfigError::auth(format!(
                "auth.session_cookie contains invalid characters: '{}'",
                name
            )));
        }
        Ok(())
    }

    fn validate_jwt(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.provider = \"jwt\" requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(secret), _) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )))
            }
            (Some(_), _) => Ok(()),
            (None, Some(key_path)) => {
                let path = Path::new(key_path);
                if path.is_absolute() || key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative and cannot contain '..'",
                    ));
                }
                let full_path = config_dir.join(path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        full_path.display()
                    )));
                }
                Ok(())
            }
        }
    }

    fn validate_remote(&self) -> ConfigErrorResult<()> {
        match &self.remote_url {
            None => Err(ConfigError::auth(
                "auth.provider = \"remote\" requires auth.remote_url",
            )),
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                Err(ConfigError::auth(format!(
                    "auth.remote_url must start with http:// or https://, got '{}'",
                    url
                )))
            }
            Some(_) => Ok(()),
        }
    }
}
