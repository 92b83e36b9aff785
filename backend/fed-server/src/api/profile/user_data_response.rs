use fed_core::Identity;
use fed_identity::UserProfileView;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataResponse {
    pub user_name: String,
    pub user_color: String,
}

impl From<&Identity> for UserDataResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            user_name: identity.user_name.clone(),
            user_color: identity.user_color.clone(),
        }
    }
}

impl From<UserProfileView> for UserDataResponse {
    fn from(view: UserProfileView) -> Self {
        Self {
            user_name: view.user_name,
            user_color: view.user_color,
        }
    }
}
