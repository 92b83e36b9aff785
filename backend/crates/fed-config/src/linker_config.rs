use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_WRITE_ATTEMPTS, MAX_MAX_WRITE_ATTEMPTS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinkerConfig {
    /// Read-modify-write attempts before a version conflict is reported
    pub max_write_attempts: u32,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            max_write_attempts: DEFAULT_MAX_WRITE_ATTEMPTS,
        }
    }
}

impl LinkerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_write_attempts == 0 || self.max_write_attempts > MAX_MAX_WRITE_ATTEMPTS {
            return Err(ConfigError::invalid("linker", format!(
                "linker.max_write_attempts must be 1-{}, got {}",
                MAX_MAX_WRITE_ATTEMPTS, self.max_write_attempts
            )));
        }
        Ok(())
    }
}
