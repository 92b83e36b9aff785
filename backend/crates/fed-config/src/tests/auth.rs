use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, not, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Auth
// =========================================================================

#[test]
#[serial]
fn given_no_session_secret_when_validate_then_error_names_env_var() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _secret = EnvGuard::remove("FED_AUTH_SESSION_SECRET");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("FED_AUTH_SESSION_SECRET"));
}

#[test]
#[serial]
fn given_session_secret_too_short_when_validate_then_error_mentions_32_chars() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _secret = EnvGuard::set("FED_AUTH_SESSION_SECRET", "tooshort");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32 characters"));
    assert_that!(err_msg, not(contains_substring("tooshort")));
}

#[test]
#[serial]
fn given_session_secret_exactly_32_chars_when_validate_then_ok() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _secret = EnvGuard::set("FED_AUTH_SESSION_SECRET", "12345678901234567890123456789012");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_ttl_below_minimum_when_validate_then_error() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _ttl = EnvGuard::set("FED_AUTH_SESSION_TTL_SECS", "30");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("session_ttl_secs"));
}

#[test]
#[serial]
fn given_ttl_above_thirty_days_when_validate_then_error() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _ttl = EnvGuard::set("FED_AUTH_SESSION_TTL_SECS", "2592001");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_excessive_leeway_when_validate_then_error() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _leeway = EnvGuard::set("FED_AUTH_LEEWAY_SECS", "301");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("leeway_secs"));
}

#[test]
#[serial]
fn given_secret_when_debug_formatted_then_redacted() {
    // Given
    let (_temp, _guards) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let debug = format!("{:?}", config.auth);

    // Then
    assert_that!(debug, contains_substring("[REDACTED]"));
    assert_that!(debug.contains(crate::tests::VALID_SECRET), eq(false));
}
