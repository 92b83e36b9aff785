use crate::{ApiError, LinkAccountRequest, LoginRequest, OAuthLoginRequest, UnlinkAccountRequest};

use fed_core::ProviderKind;

use googletest::prelude::*;
use serde_json::json;

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn given_oauth_body_with_link_uid_when_converted_then_callback_carries_it() {
    let request: OAuthLoginRequest = serde_json::from_value(json!({
        "code": "abc",
        "redirect_uri": "https://app.example/cb",
        "linkUID": "google_42",
        "code_verifier": ""
    }))
    .unwrap();

    let callback = request.into_callback().unwrap();

    assert_that!(callback.code, eq("abc"));
    assert_eq!(callback.link_uid.as_deref(), Some("google_42"));
    assert_that!(callback.code_verifier.is_none(), eq(true));
}

#[test]
fn given_oauth_body_without_code_when_converted_then_code_field_named() {
    let request: OAuthLoginRequest =
        serde_json::from_value(json!({"redirect_uri": "https://app.example/cb"})).unwrap();

    let error = request.into_callback().unwrap_err();

    assert_eq!(field_of(error).as_deref(), Some("code"));
}

#[test]
fn given_login_body_missing_both_when_validated_then_email_reported_first() {
    let request: LoginRequest = serde_json::from_value(json!({})).unwrap();

    let error = request.validate().unwrap_err();

    assert_eq!(field_of(error).as_deref(), Some("email"));
}

#[test]
fn given_link_body_with_provider_id_when_validated_then_kind_parsed() {
    let request: LinkAccountRequest = serde_json::from_value(json!({
        "provider": "twitter.com",
        "credential": "code",
        "redirect_uri": "https://app.example/cb",
        "code_verifier": "verifier"
    }))
    .unwrap();

    let kind = request.validate().unwrap();

    assert_that!(kind, eq(ProviderKind::Twitter));
}

#[test]
fn given_password_link_without_redirect_when_validated_then_ok() {
    let request: LinkAccountRequest =
        serde_json::from_value(json!({"provider": "password", "credential": "Secret123"}))
            .unwrap();

    let kind = request.validate().unwrap();

    assert_that!(kind, eq(ProviderKind::Password));
}

#[test]
fn given_unlink_body_without_provider_when_validated_then_provider_field_named() {
    let request: UnlinkAccountRequest = serde_json::from_value(json!({})).unwrap();

    let error = request.validate().unwrap_err();

    assert_eq!(field_of(error).as_deref(), Some("provider"));
}
