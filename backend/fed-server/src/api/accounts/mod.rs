#[allow(clippy::module_inception)]
pub mod accounts;
pub mod link_account_request;
pub mod provider_detail_dto;
pub mod provider_list_response;
pub mod success_response;
pub mod unlink_account_request;
