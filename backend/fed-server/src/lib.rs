pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod provider_setup;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::{link_account, unlink_account, user_providers, user_providers_detail},
        link_account_request::LinkAccountRequest,
        provider_detail_dto::{ProviderDetailDto, ProviderDetailListResponse},
        provider_list_response::ProviderListResponse,
        success_response::SuccessResponse,
        unlink_account_request::UnlinkAccountRequest,
    },
    auth::{
        auth::{oauth_login, password_login, signup},
        login_request::LoginRequest,
        oauth_login_request::OAuthLoginRequest,
        session_response::SessionResponse,
        signup_response::SignupResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{api_json::ApiJson, principal::Principal},
    profile::{
        profile::{get_user_data, update_user_data, user_profile},
        user_data_request::UserDataRequest,
        user_data_response::UserDataResponse,
        user_profile_response::UserProfileResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use provider_setup::build_registry;
pub use routes::build_router;
