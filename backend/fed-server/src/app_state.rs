use crate::error::Result as ServerErrorResult;

use fed_auth::{LoginRateLimitConfig, LoginRateLimiter, SessionIssuer, SessionValidator};
use fed_config::Config;
use fed_db::IdentityStore;
use fed_identity::{AccountLinker, FederationService, IdentityResolver};
use fed_providers::ProviderRegistry;

use std::sync::Arc;

/// Shared per-process state handed to every handler through axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn IdentityStore>,
    pub federation: FederationService,
    pub validator: Arc<SessionValidator>,
    pub login_limiter: Arc<LoginRateLimiter>,
}

impl AppState {
    /// Wire the session keys, limiter, resolver and linker from config.
    pub fn build(
        config: &Config,
        store: Arc<dyn IdentityStore>,
        providers: ProviderRegistry,
    ) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .session_secret
            .as_deref()
            .unwrap_or_default()
            .as_bytes();

        let issuer = Arc::new(SessionIssuer::new(secret, config.auth.session_ttl_secs)?);
        let validator = Arc::new(SessionValidator::new(secret, config.auth.leeway_secs)?);

        let login_limiter = Arc::new(LoginRateLimiter::new(LoginRateLimitConfig {
            max_attempts: config.rate_limit.login_max_attempts,
            window_secs: config.rate_limit.login_window_secs,
        }));

        let resolver = IdentityResolver::new(store.clone())
            .with_default_color(&config.profile.default_color);
        let linker = AccountLinker::new(store.clone())
            .with_default_color(&config.profile.default_color)
            .with_max_write_attempts(config.linker.max_write_attempts);

        let federation = FederationService::new(
            resolver,
            linker,
            issuer,
            providers,
            login_limiter.clone(),
        );

        Ok(Self {
            store,
            federation,
            validator,
            login_limiter,
        })
    }
}
