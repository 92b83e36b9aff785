use crate::ProviderKind;

use std::str::FromStr;

#[test]
fn test_provider_kind_as_str() {
    assert_eq!(ProviderKind::Password.as_str(), "password");
    assert_eq!(ProviderKind::Google.as_str(), "google");
    assert_eq!(ProviderKind::Github.as_str(), "github");
    assert_eq!(ProviderKind::Twitter.as_str(), "twitter");
}

#[test]
fn test_provider_kind_from_str_accepts_short_and_provider_ids() {
    assert_eq!(ProviderKind::from_str("google").unwrap(), ProviderKind::Google);
    assert_eq!(ProviderKind::from_str("google.com").unwrap(), ProviderKind::Google);
    assert_eq!(ProviderKind::from_str("GitHub.com").unwrap(), ProviderKind::Github);
    assert_eq!(ProviderKind::from_str(" twitter ").unwrap(), ProviderKind::Twitter);
    assert_eq!(ProviderKind::from_str("password").unwrap(), ProviderKind::Password);
    assert!(ProviderKind::from_str("facebook").is_err());
    assert!(ProviderKind::from_str("").is_err());
}

#[test]
fn test_provider_kind_precedence_order() {
    assert_eq!(
        ProviderKind::ALL,
        [
            ProviderKind::Password,
            ProviderKind::Google,
            ProviderKind::Github,
            ProviderKind::Twitter
        ]
    );
    assert!(ProviderKind::Password < ProviderKind::Google);
    assert!(ProviderKind::Github < ProviderKind::Twitter);
}

#[test]
fn test_provider_kind_is_oauth() {
    assert!(!ProviderKind::Password.is_oauth());
    assert!(ProviderKind::OAUTH.iter().all(|k| k.is_oauth()));
}
