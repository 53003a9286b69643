use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. FM_CONFIG_DIR env var, else ./.fm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FM_CONFIG_DIR env var > ./.fm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;

        let db_path = Path::new(&self.database.path);
        if self.database.path.is_empty() || db_path.is_absolute() || self.database.path.contains("..")
        {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::database(
                "database.max_connections must be > 0",
            ));
        }

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the RS256 public key, if configured.
    pub fn jwt_public_key_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        Ok(self.auth.public_key_path(&Self::config_dir()?))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (timeout {}s, body limit {} bytes)",
            self.server.host,
            self.server.port,
            self.server.request_timeout_secs,
            self.server.max_body_bytes
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );

        match self.auth.provider {
            crate::AuthProvider::Jwt => info!(
                "  auth: jwt ({}, audience: {}), cookie '{}'",
                self.auth.jwt_algorithm_name(),
                self.auth.jwt_audience.as_deref().unwrap_or("any"),
                self.auth.session_cookie
            ),
            crate::AuthProvider::Remote => info!(
                "  auth: remote ({}, api key: {}), cookie '{}'",
                self.auth.remote_url.as_deref().unwrap_or("<unset>"),
                if self.auth.remote_api_key.is_some() {
                    "set"
                } else {
                    "unset"
                },
                self.auth.session_cookie
            ),
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FM_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "FM_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );
        Self::apply_env_parse("FM_SERVER_MAX_BODY_BYTES", &mut self.server.max_body_bytes);

        // Database
        Self::apply_env_string("FM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_parse("FM_AUTH_PROVIDER", &mut self.auth.provider);
        Self::apply_env_option_string("FM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "FM_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("FM_AUTH_JWT_AUDIENCE", &mut self.auth.jwt_audience);
        Self::apply_env_string("FM_AUTH_SESSION_COOKIE", &mut self.auth.session_cookie);
        Self::apply_env_option_string("FM_AUTH_REMOTE_URL", &mut self.auth.remote_url);
        Self::apply_env_option_string("FM_AUTH_REMOTE_API_KEY", &mut self.auth.remote_api_key);

        // Logging
        Self::apply_env_parse("FM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FM_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
