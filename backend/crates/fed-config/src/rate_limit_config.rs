use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_MAX_ATTEMPTS, DEFAULT_LOGIN_WINDOW_SECS,
    MAX_LOGIN_MAX_ATTEMPTS, MAX_LOGIN_WINDOW_SECS,
};

use serde::Deserialize;

/// Password login throttling, applied per normalized email.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub login_max_attempts: u32,
    pub login_window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            login_max_attempts: DEFAULT_LOGIN_MAX_ATTEMPTS,
            login_window_secs: DEFAULT_LOGIN_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.login_max_attempts == 0 || self.login_max_attempts > MAX_LOGIN_MAX_ATTEMPTS {
            return Err(ConfigError::invalid("rate_limit", format!(
                "rate_limit.login_max_attempts must be 1-{}, got {}",
                MAX_LOGIN_MAX_ATTEMPTS, self.login_max_attempts
            )));
        }

        if self.login_window_secs == 0 || self.login_window_secs > MAX_LOGIN_WINDOW_SECS {
            return Err(ConfigError::invalid("rate_limit", format!(
                "rate_limit.login_window_secs must be 1-{}, got {}",
                MAX_LOGIN_WINDOW_SECS, self.login_window_secs
            )));
        }

        Ok(())
    }
}
