mod auth_config;
mod config;
mod database_config;
mod error;
mod linker_config;
mod log_level;
mod logging_config;
mod profile_config;
mod providers_config;
mod rate_limit_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use linker_config::LinkerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use profile_config::ProfileConfig;
pub use providers_config::{OAuthClientConfig, PasswordBackendConfig, ProvidersConfig};
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "FED_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".fed";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "identities.db";
const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 5;
const MAX_OPERATION_TIMEOUT_SECS: u64 = 60;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const MIN_SESSION_SECRET_LENGTH: usize = 32;
const DEFAULT_SESSION_TTL_SECS: i64 = 24 * 60 * 60;
const MIN_SESSION_TTL_SECS: i64 = 60;
const MAX_SESSION_TTL_SECS: i64 = 30 * 24 * 60 * 60;
const MAX_LEEWAY_SECS: u64 = 300;

const DEFAULT_MAX_WRITE_ATTEMPTS: u32 = 3;
const MAX_MAX_WRITE_ATTEMPTS: u32 = 10;

const DEFAULT_LOGIN_MAX_ATTEMPTS: u32 = 10;
const MAX_LOGIN_MAX_ATTEMPTS: u32 = 1000;
const DEFAULT_LOGIN_WINDOW_SECS: u64 = 300;
const MAX_LOGIN_WINDOW_SECS: u64 = 24 * 60 * 60;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
