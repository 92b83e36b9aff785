use serde::Deserialize;

/// Body of `POST /api/user-data`; field rules live with the identity model
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataRequest {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_color: String,
}
