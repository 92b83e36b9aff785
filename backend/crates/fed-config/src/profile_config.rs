use crate::{ConfigError, ConfigErrorResult};

use fed_core::{DEFAULT_USER_COLOR, validate_color};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Colour given to identities that never picked one
    pub default_color: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default_color: String::from(DEFAULT_USER_COLOR),
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_color(&self.default_color).map_err(|_| {
            ConfigError::invalid("profile", format!(
                "profile.default_color must be #rgb or #rrggbb, got '{}'",
                self.default_color
            ))
        })?;
        Ok(())
    }
}
