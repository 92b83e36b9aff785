use crate::{ProviderKind, VerifiedProfile};

use googletest::prelude::*;

#[test]
fn given_oauth_profile_when_candidate_uid_requested_then_prefixed_with_kind() {
    let profile = VerifiedProfile::new(ProviderKind::Google, "42", "e@x.com", true).unwrap();
    assert_that!(profile.candidate_uid(), eq("google_42"));

    let profile = VerifiedProfile::new(ProviderKind::Twitter, "7", "t@x.com", false).unwrap();
    assert_that!(profile.candidate_uid(), eq("twitter_7"));
}

#[test]
fn given_password_profile_when_candidate_uid_requested_then_backend_uid_is_reused() {
    let profile = VerifiedProfile::new(ProviderKind::Password, "u1", "E@X.com", true).unwrap();
    assert_that!(profile.candidate_uid(), eq("u1"));
    assert_that!(profile.email, eq("e@x.com"));
}

#[test]
fn given_blank_provider_uid_when_profile_built_then_rejected() {
    assert!(VerifiedProfile::new(ProviderKind::Github, "  ", "e@x.com", true).is_err());
}

#[test]
fn given_blank_display_name_when_attached_then_dropped() {
    let profile = VerifiedProfile::new(ProviderKind::Github, "9", "e@x.com", true)
        .unwrap()
        .with_display_name(Some(" ".to_string()))
        .with_avatar_url(Some("https://avatars.example/9".to_string()));

    assert_that!(profile.display_name, none());
    assert_that!(profile.avatar_url.as_deref(), some(eq("https://avatars.example/9")));
}
