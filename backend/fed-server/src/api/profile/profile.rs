//! Profile handlers

use crate::{
    ApiJson, ApiResult, AppState, Principal, UserDataRequest, UserDataResponse,
    UserProfileResponse,
};

use axum::{Json, extract::State};

/// GET /api/user-profile
pub async fn user_profile(
    State(state): State<AppState>,
    Principal(principal): Principal,
) -> ApiResult<Json<UserProfileResponse>> {
    let view = state.federation.user_profile(&principal).await?;
    Ok(Json(UserProfileResponse::from(view)))
}

/// GET /api/user-data
///
/// An identity with no stored record gets the defaults.
pub async fn get_user_data(
    State(state): State<AppState>,
    Principal(principal): Principal,
) -> ApiResult<Json<UserDataResponse>> {
    let view = state.federation.user_profile(&principal).await?;
    Ok(Json(UserDataResponse::from(view)))
}

/// POST /api/user-data
pub async fn update_user_data(
    State(state): State<AppState>,
    Principal(principal): Principal,
    ApiJson(request): ApiJson<UserDataRequest>,
) -> ApiResult<Json<UserDataResponse>> {
    let identity = state
        .federation
        .update_profile(&principal, &request.user_name, &request.user_color)
        .await?;

    Ok(Json(UserDataResponse::from(&identity)))
}
