//! Sign-in and signup handlers

use crate::{
    ApiJson, ApiResult, AppState, LoginRequest, OAuthLoginRequest, Principal, SessionResponse,
    SignupResponse,
};

use fed_core::ProviderKind;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// POST /api/auth/{provider}
///
/// Exchange an OAuth authorization code for a session. With `linkUID` the
/// provider is attached to that identity instead, which requires the
/// caller's session for the same uid.
pub async fn oauth_login(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    principal: Option<Principal>,
    ApiJson(request): ApiJson<OAuthLoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let kind: ProviderKind = provider.parse()?;
    let callback = request.into_callback()?;

    let grant = state
        .federation
        .login_with_oauth(kind, &callback, principal.as_ref().map(|p| &p.0))
        .await?;

    Ok(Json(SessionResponse::from(grant)))
}

/// POST /api/login
pub async fn password_login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    request.validate()?;

    let grant = state
        .federation
        .login_with_password(&request.email, &request.password)
        .await?;

    Ok(Json(SessionResponse::from(grant)))
}

/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    request.validate()?;

    let account = state
        .federation
        .signup(&request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(SignupResponse::from(account))))
}
