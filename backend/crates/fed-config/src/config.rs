use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LinkerConfig, LoggingConfig, ProfileConfig,
    ProvidersConfig, RateLimitConfig, ServerConfig,
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
    pub profile: ProfileConfig,
    pub linker: LinkerConfig,
    pub rate_limit: RateLimitConfig,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FED_CONFIG_DIR env var, else use ./.fed/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FED_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)
                .map_err(|e| ConfigError::io(&config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::toml(path, e))
    }

    /// Priority: FED_CONFIG_DIR env var > ./.fed/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|e| ConfigError::io(Path::new("."), e))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.profile.validate()?;
        self.linker.validate()?;
        self.rate_limit.validate()?;
        self.providers.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log file location resolved against the config directory
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        Ok(self.logging.file_path(&Self::config_dir()?))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (timeout={}s, max {} connections)",
            self.database.path,
            self.database.operation_timeout_secs,
            self.database.max_connections
        );
        info!(
            "  auth: session secret {}, ttl={}s, leeway={}s",
            if self.auth.session_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.session_ttl_secs,
            self.auth.leeway_secs
        );
        info!("  profile: default_color={}", self.profile.default_color);
        info!(
            "  linker: max_write_attempts={}",
            self.linker.max_write_attempts
        );
        info!(
            "  rate_limit: login {}/{}s",
            self.rate_limit.login_max_attempts, self.rate_limit.login_window_secs
        );

        let enabled = self.providers.enabled();
        info!(
            "  providers: {}",
            if enabled.is_empty() {
                String::from("none")
            } else {
                enabled.join(", ")
            }
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FED_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FED_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("FED_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FED_DATABASE_OPERATION_TIMEOUT_SECS",
            &mut self.database.operation_timeout_secs,
        );
        Self::apply_env_parse(
            "FED_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("FED_AUTH_SESSION_SECRET", &mut self.auth.session_secret);
        Self::apply_env_parse("FED_AUTH_SESSION_TTL_SECS", &mut self.auth.session_ttl_secs);
        Self::apply_env_parse("FED_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);

        // Profile
        Self::apply_env_string(
            "FED_PROFILE_DEFAULT_COLOR",
            &mut self.profile.default_color,
        );

        // Linker
        Self::apply_env_parse(
            "FED_LINKER_MAX_WRITE_ATTEMPTS",
            &mut self.linker.max_write_attempts,
        );

        // Rate limit
        Self::apply_env_parse(
            "FED_RATE_LIMIT_LOGIN_MAX_ATTEMPTS",
            &mut self.rate_limit.login_max_attempts,
        );
        Self::apply_env_parse(
            "FED_RATE_LIMIT_LOGIN_WINDOW_SECS",
            &mut self.rate_limit.login_window_secs,
        );

        // Providers
        Self::apply_env_option_string(
            "FED_GOOGLE_CLIENT_ID",
            &mut self.providers.google.client_id,
        );
        Self::apply_env_option_string(
            "FED_GOOGLE_CLIENT_SECRET",
            &mut self.providers.google.client_secret,
        );
        Self::apply_env_option_string(
            "FED_GITHUB_CLIENT_ID",
            &mut self.providers.github.client_id,
        );
        Self::apply_env_option_string(
            "FED_GITHUB_CLIENT_SECRET",
            &mut self.providers.github.client_secret,
        );
        Self::apply_env_option_string(
            "FED_TWITTER_CLIENT_ID",
            &mut self.providers.twitter.client_id,
        );
        Self::apply_env_option_string(
            "FED_TWITTER_CLIENT_SECRET",
            &mut self.providers.twitter.client_secret,
        );
        Self::apply_env_option_string(
            "FED_PASSWORD_API_KEY",
            &mut self.providers.password.api_key,
        );
        Self::apply_env_option_string(
            "FED_PASSWORD_BASE_URL",
            &mut self.providers.password.base_url,
        );

        // Logging
        Self::apply_env_parse("FED_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FED_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FED_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("FED_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
