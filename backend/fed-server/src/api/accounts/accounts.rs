//! Account linking handlers
//!
//! All routes here require a session; the caller's uid comes from the
//! [`Principal`] extractor, never from the body.

use crate::{
    ApiJson, ApiResult, AppState, LinkAccountRequest, Principal, ProviderDetailDto,
    ProviderDetailListResponse, ProviderListResponse, SuccessResponse, UnlinkAccountRequest,
};

use axum::{Json, extract::State};
use log::info;

/// POST /api/link-account
pub async fn link_account(
    State(state): State<AppState>,
    Principal(principal): Principal,
    ApiJson(request): ApiJson<LinkAccountRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let kind = request.validate()?;

    state
        .federation
        .link_account(
            &principal,
            kind,
            &request.credential,
            request.redirect_uri.as_deref(),
            request.code_verifier.as_deref(),
        )
        .await?;

    info!("Linked {} to {}", kind, principal.uid);
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/unlink-account
pub async fn unlink_account(
    State(state): State<AppState>,
    Principal(principal): Principal,
    ApiJson(request): ApiJson<UnlinkAccountRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let kind = request.validate()?;

    state.federation.unlink_account(&principal, kind).await?;

    info!("Unlinked {} from {}", kind, principal.uid);
    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/user-providers
pub async fn user_providers(
    State(state): State<AppState>,
    Principal(principal): Principal,
) -> ApiResult<Json<ProviderListResponse>> {
    let kinds = state.federation.linked_providers(&principal).await?;
    Ok(Json(ProviderListResponse::from(kinds)))
}

/// GET /api/user-providers-detail
pub async fn user_providers_detail(
    State(state): State<AppState>,
    Principal(principal): Principal,
) -> ApiResult<Json<ProviderDetailListResponse>> {
    let details = state.federation.provider_details(&principal).await?;
    Ok(Json(ProviderDetailListResponse {
        providers: details.into_iter().map(ProviderDetailDto::from).collect(),
    }))
}
