#[allow(clippy::module_inception)]
pub mod auth;
pub mod login_request;
pub mod oauth_login_request;
pub mod session_response;
pub mod signup_response;
