use crate::{AuthError, LoginRateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Per-account password login limiter, keyed by normalized email.
///
/// Each key may burst `max_attempts` and regains one attempt every
/// `window_secs / max_attempts`.
pub struct LoginRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    config: LoginRateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: LoginRateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_attempts).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Record one attempt for `key`, failing once the key's quota is spent
    #[track_caller]
    pub fn check(&self, key: &str) -> AuthErrorResult<()> {
        let key = key.trim().to_lowercase();
        self.limiter
            .check_key(&key)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_attempts,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Forget keys whose quota has fully replenished
    pub fn prune(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    pub fn tracked_keys(&self) -> usize {
        self.limiter.len()
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new(LoginRateLimitConfig::default())
    }
}
