#![allow(dead_code)]

//! Test infrastructure for fed-server API tests
//!
//! Provider clients are the real HTTP clients pointed at one wiremock
//! server standing in for Google, GitHub and the password backend.

use fed_config::Config;
use fed_db::{IdentityRepository, IdentityStore};
use fed_server::{AppState, build_registry, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, body_string_contains, header as header_matcher, method, path},
};

pub const TEST_SECRET: &str = "test-secret-that-is-at-least-32-bytes!";

/// Create an in-memory identity store with migrations applied
pub async fn create_test_store() -> Arc<IdentityRepository> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create test database");

    fed_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Arc::new(IdentityRepository::new(pool))
}

/// Config with a session secret and every provider pointed at `upstream`
pub fn test_config(upstream: &MockServer) -> Config {
    let mut config = Config::default();
    config.auth.session_secret = Some(TEST_SECRET.to_string());
    config.rate_limit.login_max_attempts = 3;
    config.rate_limit.login_window_secs = 60;

    for (client, name) in [
        (&mut config.providers.google, "google"),
        (&mut config.providers.github, "github"),
        (&mut config.providers.twitter, "twitter"),
    ] {
        client.client_id = Some(format!("{name}-client"));
        client.client_secret = Some(format!("{name}-secret"));
        client.base_url = Some(upstream.uri());
    }
    config.providers.password.api_key = Some("api-key".to_string());
    config.providers.password.base_url = Some(upstream.uri());

    config
}

pub struct TestApp {
    pub upstream: MockServer,
    pub store: Arc<dyn IdentityStore>,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let upstream = MockServer::start().await;
        let config = test_config(&upstream);
        Self::with_config(upstream, config).await
    }

    pub async fn with_config(upstream: MockServer, config: Config) -> Self {
        let store: Arc<dyn IdentityStore> = create_test_store().await;
        Self::with_store(upstream, config, store)
    }

    pub fn with_store(upstream: MockServer, config: Config, store: Arc<dyn IdentityStore>) -> Self {
        let providers = build_registry(&config.providers).expect("provider setup");
        let state = AppState::build(&config, store.clone(), providers).expect("state setup");
        Self {
            upstream,
            store,
            state,
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send("GET", uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, token, Some(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send("POST", uri, None, Some(body.to_string())).await
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// Google accepts `code` and reports the given user
    pub async fn mount_google_user(&self, code: &str, id: &str, email: &str, verified: bool) {
        let access_token = format!("google-token-{code}");
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains(format!("code={code}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": access_token,
                "token_type": "Bearer",
                "expires_in": 3599
            })))
            .mount(&self.upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header_matcher(
                "authorization",
                format!("Bearer {access_token}").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "email": email,
                "verified_email": verified,
                "name": "Test User"
            })))
            .mount(&self.upstream)
            .await;
    }

    /// GitHub accepts `code` and reports a user with one primary verified email
    pub async fn mount_github_user(&self, code: &str, id: u64, email: &str) {
        let access_token = format!("gho_{code}");
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .and(body_string_contains(format!("code={code}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": access_token,
                "token_type": "bearer",
                "scope": "read:user,user:email"
            })))
            .mount(&self.upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header_matcher(
                "authorization",
                format!("Bearer {access_token}").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "login": "octocat",
                "name": "Octo Cat",
                "email": null,
                "avatar_url": null
            })))
            .mount(&self.upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/emails"))
            .and(header_matcher(
                "authorization",
                format!("Bearer {access_token}").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"email": email, "primary": true, "verified": true}
            ])))
            .mount(&self.upstream)
            .await;
    }

    /// Password backend accepts `email`/`password` as account `uid`
    pub async fn mount_password_account(&self, uid: &str, email: &str, password: &str) {
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .and(body_partial_json(json!({"email": email, "password": password})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": uid,
                "email": email,
                "registered": true
            })))
            .with_priority(1)
            .mount(&self.upstream)
            .await;
    }

    /// Any other password sign-in is rejected
    pub async fn mount_password_rejection(&self) {
        Mock::given(method("POST"))
            .and(path("/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "INVALID_LOGIN_CREDENTIALS"}
            })))
            .with_priority(10)
            .mount(&self.upstream)
            .await;
    }

    /// Backend creates the account for `email` as `uid`
    pub async fn mount_signup(&self, uid: &str, email: &str) {
        Mock::given(method("POST"))
            .and(path("/accounts:signUp"))
            .and(body_partial_json(json!({"email": email})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": uid,
                "email": email
            })))
            .mount(&self.upstream)
            .await;
    }

    /// Sign in with Google and return the session token
    pub async fn google_session(&self, code: &str) -> String {
        let (status, json) = self
            .post(
                "/api/auth/google",
                None,
                json!({"code": code, "redirect_uri": "https://app.example/cb"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "google sign-in failed: {json}");
        json["sessionToken"].as_str().unwrap().to_string()
    }
}
