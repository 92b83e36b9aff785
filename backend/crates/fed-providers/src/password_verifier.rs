use crate::Result as ProviderErrorResult;

use async_trait::async_trait;

/// Account known to the backing password service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAccount {
    pub uid: String,
    pub email: String,
}

/// Backing auth service that owns password credentials.
///
/// Passwords are sent over TLS and checked by the service; nothing here
/// stores or transforms them.
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderErrorResult<PasswordAccount>;

    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderErrorResult<PasswordAccount>;
}
