use crate::{IdentityError, check_password_strength};

use googletest::prelude::*;

#[test]
fn given_mixed_case_and_digit_when_checked_then_accepted() {
    assert!(check_password_strength("Secret123").is_ok());
    assert!(check_password_strength("Pässwörd1").is_ok());
    assert!(check_password_strength("with space Aa1").is_ok());
}

#[test]
fn given_short_password_when_checked_then_field_is_password() {
    let result = check_password_strength("Ab1");

    match result {
        Err(IdentityError::Validation { message, field, .. }) => {
            assert_that!(field.as_deref(), some(eq("password")));
            assert_that!(message, contains_substring("at least 8 characters"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_missing_classes_when_checked_then_every_rule_is_listed() {
    let result = check_password_strength("alllowercase");

    match result {
        Err(IdentityError::Validation { message, .. }) => {
            assert_that!(message, contains_substring("upper-case"));
            assert_that!(message, contains_substring("digit"));
            assert_that!(message, not(contains_substring("lower-case")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
