use crate::{
    AppState, get_user_data, health, link_account, oauth_login, password_login, signup,
    unlink_account, update_user_data, user_profile, user_providers, user_providers_detail,
};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Sign-in
        .route("/api/auth/{provider}", post(oauth_login))
        .route("/api/login", post(password_login))
        .route("/api/signup", post(signup))
        // Linked accounts
        .route("/api/link-account", post(link_account))
        .route("/api/unlink-account", post(unlink_account))
        .route("/api/user-providers", get(user_providers))
        .route("/api/user-providers-detail", get(user_providers_detail))
        // Profile
        .route("/api/user-profile", get(user_profile))
        .route("/api/user-data", get(get_user_data).post(update_user_data))
        .with_state(state)
}
