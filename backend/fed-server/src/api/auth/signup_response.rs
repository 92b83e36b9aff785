use fed_providers::PasswordAccount;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub uid: String,
    pub email: String,
}

impl From<PasswordAccount> for SignupResponse {
    fn from(account: PasswordAccount) -> Self {
        Self {
            uid: account.uid,
            email: account.email,
        }
    }
}
