use crate::ApiError;

use fed_core::{CoreError, ErrorLocation, ProviderKind};
use fed_db::DbError;
use fed_identity::IdentityError;

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_of(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(IdentityError::validation("code is required", "code"));

    let (status, json) = body_of(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "code is required");
    assert_eq!(json["error"]["field"], "code");
}

#[tokio::test]
async fn test_error_without_field_omits_field_key() {
    let error = ApiError::from(IdentityError::auth("invalid email or password"));

    let (status, json) = body_of(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert!(json["error"].get("field").is_none());
}

#[test]
fn test_identity_errors_map_to_statuses() {
    let cases = vec![
        (
            ApiError::from(IdentityError::conflict("taken")),
            StatusCode::CONFLICT,
        ),
        (
            ApiError::from(IdentityError::not_found("missing")),
            StatusCode::NOT_FOUND,
        ),
        (
            ApiError::from(CoreError::LastBinding {
                location: ErrorLocation::from(Location::caller()),
            }),
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::from(IdentityError::RateLimited {
                message: "too many attempts".into(),
                location: ErrorLocation::from(Location::caller()),
            }),
            StatusCode::TOO_MANY_REQUESTS,
        ),
        (
            ApiError::from(IdentityError::NotConfigured {
                provider: ProviderKind::Twitter,
                location: ErrorLocation::from(Location::caller()),
            }),
            StatusCode::NOT_IMPLEMENTED,
        ),
        (
            ApiError::from(IdentityError::internal("failed to issue session")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.status(), expected, "{error}");
    }
}

#[tokio::test]
async fn test_store_error_hides_details() {
    let error = ApiError::from(IdentityError::from(DbError::Timeout {
        operation: "find_by_uid",
        timeout_ms: 5000,
        location: ErrorLocation::from(Location::caller()),
    }));

    let (status, json) = body_of(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("find_by_uid"));
}

#[tokio::test]
async fn test_unknown_provider_names_provider_field() {
    let error = ApiError::from(
        "myspace"
            .parse::<ProviderKind>()
            .expect_err("unknown provider"),
    );

    let (status, json) = body_of(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "provider");
}

#[tokio::test]
async fn test_not_configured_message_names_provider() {
    let error = ApiError::from(IdentityError::NotConfigured {
        provider: ProviderKind::Github,
        location: ErrorLocation::from(Location::caller()),
    });

    let (_, json) = body_of(error).await;

    assert_eq!(json["error"]["code"], "NOT_CONFIGURED");
    assert_eq!(json["error"]["message"], "GitHub sign-in is not configured");
}
