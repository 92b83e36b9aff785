use crate::{IdentityError, Result as IdentityErrorResult};

/// Shortest password accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Signup strength rules: minimum length plus an upper-case letter, a
/// lower-case letter and a digit. Every failed rule is listed in the message.
#[track_caller]
pub fn check_password_strength(password: &str) -> IdentityErrorResult<()> {
    let mut problems = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        problems.push(format!("at least {MIN_PASSWORD_LENGTH} characters"));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        problems.push("an upper-case letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        problems.push("a lower-case letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("a digit".to_string());
    }

    if problems.is_empty() {
        return Ok(());
    }

    Err(IdentityError::validation(
        format!("password must contain {}", problems.join(", ")),
        "password",
    ))
}
