use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

/// `[server]`: where the HTTP API listens
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// 0 asks the OS for a free port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() || self.host.contains(char::is_whitespace) {
            return Err(ConfigError::invalid(
                "server",
                format!("server.host '{}' is not a valid host", self.host),
            ));
        }

        if (1..MIN_PORT).contains(&self.port) {
            return Err(ConfigError::invalid(
                "server",
                format!("server.port {} is privileged; use 0 or {MIN_PORT}+", self.port),
            ));
        }

        Ok(())
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host.trim(), self.port)
    }
}
