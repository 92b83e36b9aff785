use fed_identity::ProviderDetail;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDetailDto {
    pub provider: String,
    pub email: String,
    pub display_name: String,
    pub is_linked: bool,
}

impl From<ProviderDetail> for ProviderDetailDto {
    fn from(detail: ProviderDetail) -> Self {
        Self {
            provider: detail.kind.provider_id().to_string(),
            email: detail.email,
            display_name: detail.display_name,
            is_linked: detail.is_linked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProviderDetailListResponse {
    pub providers: Vec<ProviderDetailDto>,
}
