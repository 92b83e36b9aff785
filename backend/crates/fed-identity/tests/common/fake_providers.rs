use fed_core::ProviderKind;
use fed_providers::{
    OAuthProvider, PasswordAccount, PasswordVerifier, ProviderAccessToken, ProviderError,
    ProviderProfile, Result as ProviderErrorResult,
};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

/// OAuth provider that accepts any code and returns the profile registered
/// for it. Unknown codes fail the exchange.
pub struct FakeOAuthProvider {
    kind: ProviderKind,
    profiles: Mutex<HashMap<String, ProviderProfile>>,
}

impl FakeOAuthProvider {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            profiles: Mutex::new(HashMap::new()),
        }
    }

    /// Register `code` as yielding this account
    pub fn with_account(
        self,
        code: &str,
        provider_user_id: &str,
        email: &str,
        verified: bool,
    ) -> Self {
        self.profiles.lock().unwrap().insert(
            code.to_string(),
            ProviderProfile {
                provider_user_id: provider_user_id.to_string(),
                email: Some(email.to_string()),
                display_name: Some(format!("user {provider_user_id}")),
                avatar_url: None,
                email_verified: verified,
            },
        );
        self
    }

    pub fn with_emailless_account(self, code: &str, provider_user_id: &str) -> Self {
        self.profiles.lock().unwrap().insert(
            code.to_string(),
            ProviderProfile {
                provider_user_id: provider_user_id.to_string(),
                email: None,
                display_name: None,
                avatar_url: None,
                email_verified: false,
            },
        );
        self
    }
}

#[async_trait]
impl OAuthProvider for FakeOAuthProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn exchange_code(
        &self,
        code: &str,
        _redirect_uri: &str,
        _code_verifier: Option<&str>,
    ) -> ProviderErrorResult<ProviderAccessToken> {
        if self.profiles.lock().unwrap().contains_key(code) {
            Ok(ProviderAccessToken::new(code))
        } else {
            Err(ProviderError::code_exchange(self.kind, "invalid_grant"))
        }
    }

    async fn fetch_profile(
        &self,
        token: &ProviderAccessToken,
    ) -> ProviderErrorResult<ProviderProfile> {
        self.profiles
            .lock()
            .unwrap()
            .get(token.expose())
            .cloned()
            .ok_or_else(|| ProviderError::profile_fetch(self.kind, "unknown token"))
    }
}

/// Password backend holding accounts in memory: email -> (password, uid)
pub struct FakePasswordVerifier {
    accounts: Mutex<HashMap<String, (String, String)>>,
    next_uid: Mutex<u32>,
}

impl FakePasswordVerifier {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            next_uid: Mutex::new(1),
        }
    }

    pub fn with_account(self, uid: &str, email: &str, password: &str) -> Self {
        self.accounts
            .lock()
            .unwrap()
            .insert(email.to_string(), (password.to_string(), uid.to_string()));
        self
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl PasswordVerifier for FakePasswordVerifier {
    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderErrorResult<PasswordAccount> {
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some((stored, uid)) if stored == password => Ok(PasswordAccount {
                uid: uid.clone(),
                email: email.to_string(),
            }),
            _ => Err(fed_providers::identity_toolkit_client::map_error_code(
                "INVALID_LOGIN_CREDENTIALS",
            )),
        }
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderErrorResult<PasswordAccount> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(fed_providers::identity_toolkit_client::map_error_code(
                "EMAIL_EXISTS",
            ));
        }

        let mut next = self.next_uid.lock().unwrap();
        let uid = format!("pw{}", *next);
        *next += 1;
        accounts.insert(email.to_string(), (password.to_string(), uid.clone()));

        Ok(PasswordAccount {
            uid,
            email: email.to_string(),
        })
    }
}
