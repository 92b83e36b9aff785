use std::fmt;

/// Provider access token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderAccessToken(String);

impl ProviderAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProviderAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProviderAccessToken([REDACTED])")
    }
}
