use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_TTL_SECS, MAX_LEEWAY_SECS,
    MAX_SESSION_TTL_SECS, MIN_SESSION_SECRET_LENGTH, MIN_SESSION_TTL_SECS,
};

use serde::Deserialize;

/// Session signing settings. There is no built-in secret: startup fails
/// until one is configured.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub session_secret: Option<String>,
    pub session_ttl_secs: i64,
    /// Clock skew tolerated when checking `exp`
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            leeway_secs: 0,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "session_secret",
                &self.session_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.session_secret.as_deref().unwrap_or_default();
        if secret.is_empty() {
            return Err(ConfigError::invalid(
                "auth",
                "auth.session_secret is required (set FED_AUTH_SESSION_SECRET)",
            ));
        }
        if secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(ConfigError::invalid("auth", format!(
                "auth.session_secret must be at least {} characters",
                MIN_SESSION_SECRET_LENGTH
            )));
        }

        if !(MIN_SESSION_TTL_SECS..=MAX_SESSION_TTL_SECS).contains(&self.session_ttl_secs) {
            return Err(ConfigError::invalid("auth", format!(
                "auth.session_ttl_secs must be {}-{}, got {}",
                MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::invalid("auth", format!(
                "auth.leeway_secs must be at most {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        Ok(())
    }
}
