use fed_core::ProviderKind;
use fed_providers::{
    GoogleOAuthClient, IdentityToolkitClient, OAuthCredentials, ProviderError, ProviderRegistry,
};

use std::sync::Arc;

use googletest::prelude::*;

#[test]
fn given_empty_registry_when_provider_requested_then_not_configured() {
    let registry = ProviderRegistry::new();

    assert!(matches!(
        registry.oauth(ProviderKind::Github),
        Err(ProviderError::NotConfigured { provider: ProviderKind::Github, .. })
    ));
    assert!(matches!(
        registry.password(),
        Err(ProviderError::NotConfigured { provider: ProviderKind::Password, .. })
    ));
    assert!(registry.configured_kinds().is_empty());
}

#[test]
fn given_registered_adapters_then_they_are_listed_in_precedence_order() {
    let google = GoogleOAuthClient::new(OAuthCredentials::new("id", "secret")).unwrap();
    let password = IdentityToolkitClient::new("key").unwrap();

    let registry = ProviderRegistry::new()
        .with_oauth(Arc::new(google))
        .with_password(Arc::new(password));

    assert_that!(
        registry.oauth(ProviderKind::Google).map(|p| p.kind()).ok(),
        some(eq(ProviderKind::Google))
    );
    assert_eq!(
        registry.configured_kinds(),
        vec![ProviderKind::Password, ProviderKind::Google]
    );
}
