//! Integration tests for health and readiness probes
mod common;

use crate::common::{TestApp, test_config};

use fed_core::{ErrorLocation, Identity, ProviderKind};
use fed_db::{DbError, IdentityStore, Result as DbErrorResult};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use wiremock::MockServer;

/// Store whose every call times out
struct UnreachableStore;

fn timeout() -> DbError {
    DbError::Timeout {
        operation: "ping",
        timeout_ms: 5000,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl IdentityStore for UnreachableStore {
    async fn find_by_uid(&self, _uid: &str) -> DbErrorResult<Option<Identity>> {
        Err(timeout())
    }

    async fn find_by_provider_uid(
        &self,
        _kind: ProviderKind,
        _provider_uid: &str,
    ) -> DbErrorResult<Option<Identity>> {
        Err(timeout())
    }

    async fn find_by_email(
        &self,
        _kind: ProviderKind,
        _email: &str,
    ) -> DbErrorResult<Option<Identity>> {
        Err(timeout())
    }

    async fn save(&self, _identity: &Identity) -> DbErrorResult<Identity> {
        Err(timeout())
    }

    async fn delete_identity(&self, _uid: &str) -> DbErrorResult<bool> {
        Err(timeout())
    }

    async fn ping(&self) -> DbErrorResult<()> {
        Err(timeout())
    }
}

async fn unreachable_app() -> TestApp {
    let upstream = MockServer::start().await;
    let config = test_config(&upstream);
    TestApp::with_store(upstream, config, Arc::new(UnreachableStore))
}

#[tokio::test]
async fn given_running_server_when_live_then_200() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/live", None).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn given_reachable_store_when_ready_then_200() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/ready", None).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn given_unreachable_store_when_ready_then_503() {
    let app = unreachable_app().await;

    let (status, _) = app.get("/ready", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn given_reachable_store_when_health_then_components_reported() {
    let app = TestApp::new().await;

    let (status, json) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
    assert_eq!(
        json["components"]["providers"],
        serde_json::json!(["password", "google", "github", "twitter"])
    );
}

#[tokio::test]
async fn given_unreachable_store_when_health_then_degraded() {
    let app = unreachable_app().await;

    let (status, json) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["components"]["database"], "unavailable");
}

#[tokio::test]
async fn given_unreachable_store_when_signing_in_then_500_without_store_detail() {
    let app = unreachable_app().await;
    app.mount_google_user("g-42", "42", "e@x.com", true).await;

    let (status, json) = app
        .post(
            "/api/auth/google",
            None,
            serde_json::json!({"code": "g-42", "redirect_uri": "https://app.example/cb"}),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Identity store operation failed");
}
