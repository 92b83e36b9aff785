use crate::{CoreError, MAX_USER_NAME_LENGTH, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Trims and lowercases an email, rejecting anything without a local part
/// and a dotted domain.
#[track_caller]
pub fn normalize_email(email: &str) -> CoreErrorResult<String> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    };

    if !valid {
        return Err(CoreError::Validation {
            message: "email address is invalid".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(email)
}

#[track_caller]
pub fn validate_user_name(user_name: &str) -> CoreErrorResult<String> {
    let user_name = user_name.trim();
    if user_name.is_empty() {
        return Err(CoreError::Validation {
            message: "userName is required".to_string(),
            field: Some("userName".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if user_name.chars().count() > MAX_USER_NAME_LENGTH {
        return Err(CoreError::Validation {
            message: format!("userName must be at most {MAX_USER_NAME_LENGTH} characters"),
            field: Some("userName".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(user_name.to_string())
}

/// Accepts `#rgb` or `#rrggbb`, returned lowercased.
#[track_caller]
pub fn validate_color(color: &str) -> CoreErrorResult<String> {
    let color = color.trim();
    if color.is_empty() {
        return Err(CoreError::Validation {
            message: "userColor is required".to_string(),
            field: Some("userColor".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let valid = color.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });

    if !valid {
        return Err(CoreError::Validation {
            message: format!("userColor must be a hex colour like #3b82f6, got '{color}'"),
            field: Some("userColor".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(color.to_ascii_lowercase())
}
