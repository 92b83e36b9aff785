use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status; always 200, `status` says whether the
/// store is reachable
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store_ok = state.store.ping().await.is_ok();

    let health = json!({
        "status": if store_ok { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if store_ok { "operational" } else { "unavailable" },
            "providers": state
                .federation
                .providers()
                .configured_kinds()
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe; 503 while the identity store is unreachable
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
