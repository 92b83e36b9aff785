use super::{FakeOAuthProvider, FakePasswordVerifier};

use fed_auth::{
    AuthenticatedPrincipal, LoginRateLimitConfig, LoginRateLimiter, SessionIssuer,
    SessionValidator,
};
use fed_core::ProviderKind;
use fed_db::IdentityStore;
use fed_identity::{AccountLinker, FederationService, IdentityResolver};
use fed_providers::ProviderRegistry;

use std::sync::Arc;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes!";

/// Registry with every provider backed by a fake:
/// - google code "g-42" -> 42 / e@x.com (verified)
/// - github code "gh-7" -> 7 / e@x.com (verified)
/// - twitter code "tw-9" -> 9 / e@x.com (unverified)
/// - password account u1 / e@x.com / "Secret123"
pub fn fake_registry() -> ProviderRegistry {
    ProviderRegistry::new()
        .with_oauth(Arc::new(
            FakeOAuthProvider::new(ProviderKind::Google)
                .with_account("g-42", "42", "e@x.com", true)
                .with_account("g-43", "43", "other@x.com", true),
        ))
        .with_oauth(Arc::new(
            FakeOAuthProvider::new(ProviderKind::Github)
                .with_account("gh-7", "7", "e@x.com", true)
                .with_emailless_account("gh-noemail", "8"),
        ))
        .with_oauth(Arc::new(
            FakeOAuthProvider::new(ProviderKind::Twitter)
                .with_account("tw-9", "9", "e@x.com", false),
        ))
        .with_password(Arc::new(
            FakePasswordVerifier::new().with_account("u1", "e@x.com", "Secret123"),
        ))
}

pub fn build_service(
    store: Arc<dyn IdentityStore>,
    providers: ProviderRegistry,
) -> FederationService {
    build_service_with_limit(store, providers, LoginRateLimitConfig::default())
}

pub fn build_service_with_limit(
    store: Arc<dyn IdentityStore>,
    providers: ProviderRegistry,
    limit: LoginRateLimitConfig,
) -> FederationService {
    FederationService::new(
        IdentityResolver::new(store.clone()),
        AccountLinker::new(store),
        Arc::new(SessionIssuer::new(TEST_SECRET, 3600).unwrap()),
        providers,
        Arc::new(LoginRateLimiter::new(limit)),
    )
}

pub fn validate(token: &str) -> AuthenticatedPrincipal {
    SessionValidator::new(TEST_SECRET, 0)
        .unwrap()
        .validate(token)
        .unwrap()
}

pub fn principal(uid: &str, email: &str) -> AuthenticatedPrincipal {
    AuthenticatedPrincipal {
        uid: uid.to_string(),
        email: email.to_string(),
        expires_at: i64::MAX,
    }
}
