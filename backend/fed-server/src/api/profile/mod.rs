#[allow(clippy::module_inception)]
pub mod profile;
pub mod user_data_request;
pub mod user_data_response;
pub mod user_profile_response;
