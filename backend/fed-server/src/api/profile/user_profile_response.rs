use crate::ProviderDetailDto;

use fed_identity::UserProfileView;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub user_name: String,
    pub user_color: String,
    pub providers: Vec<String>,
    pub provider_details: Vec<ProviderDetailDto>,
}

impl From<UserProfileView> for UserProfileResponse {
    fn from(view: UserProfileView) -> Self {
        Self {
            user_name: view.user_name,
            user_color: view.user_color,
            providers: view
                .providers
                .into_iter()
                .map(|kind| kind.provider_id().to_string())
                .collect(),
            provider_details: view
                .provider_details
                .into_iter()
                .map(ProviderDetailDto::from)
                .collect(),
        }
    }
}
