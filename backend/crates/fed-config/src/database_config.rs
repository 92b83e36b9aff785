use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_OPERATION_TIMEOUT_SECS, MAX_DB_MAX_CONNECTIONS, MAX_OPERATION_TIMEOUT_SECS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    /// Deadline applied to every store call
    pub operation_timeout_secs: u64,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            operation_timeout_secs: DEFAULT_OPERATION_TIMEOUT_SECS,
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = Path::new(&self.path);
        if self.path.trim().is_empty() || path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::invalid(
                "database",
                "database.path must be a relative path without '..'",
            ));
        }

        if self.operation_timeout_secs == 0
            || self.operation_timeout_secs > MAX_OPERATION_TIMEOUT_SECS
        {
            return Err(ConfigError::invalid("database", format!(
                "database.operation_timeout_secs must be 1-{}, got {}",
                MAX_OPERATION_TIMEOUT_SECS, self.operation_timeout_secs
            )));
        }

        if self.max_connections == 0 || self.max_connections > MAX_DB_MAX_CONNECTIONS {
            return Err(ConfigError::invalid("database", format!(
                "database.max_connections must be 1-{}, got {}",
                MAX_DB_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
