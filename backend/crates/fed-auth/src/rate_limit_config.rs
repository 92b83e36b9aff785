/// Configuration for login attempt limiting
#[derive(Debug, Clone)]
pub struct LoginRateLimitConfig {
    /// Attempts allowed per key within one window
    pub max_attempts: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for LoginRateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            window_secs: 300,
        }
    }
}
