use crate::ApiResult;
use crate::api::accounts::link_account_request::parse_provider;

use fed_core::ProviderKind;

use serde::Deserialize;

/// Body of `POST /api/unlink-account`
#[derive(Debug, Deserialize)]
pub struct UnlinkAccountRequest {
    #[serde(default)]
    pub provider: String,
}

impl UnlinkAccountRequest {
    #[track_caller]
    pub fn validate(&self) -> ApiResult<ProviderKind> {
        parse_provider(&self.provider)
    }
}
