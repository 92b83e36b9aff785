use fed_identity::SessionGrant;

use serde::Serialize;

#[derive(Serialize)]
pub struct SessionResponse {
    pub uid: String,
    pub email: String,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
    pub message: String,
}

impl From<SessionGrant> for SessionResponse {
    fn from(grant: SessionGrant) -> Self {
        Self {
            uid: grant.uid,
            email: grant.email,
            session_token: grant.session_token,
            message: "Login successful".to_string(),
        }
    }
}
