/// What the browser hands back after an OAuth redirect.
///
/// `Debug` leaves out the code and verifier.
#[derive(Clone, Default)]
pub struct OAuthCallback {
    pub code: String,
    pub redirect_uri: String,
    pub code_verifier: Option<String>,
    /// Link the provider to this existing identity instead of signing in
    pub link_uid: Option<String>,
}

impl OAuthCallback {
    pub fn new(code: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            redirect_uri: redirect_uri.into(),
            code_verifier: None,
            link_uid: None,
        }
    }

    pub fn with_code_verifier(mut self, code_verifier: Option<String>) -> Self {
        self.code_verifier = code_verifier.filter(|v| !v.is_empty());
        self
    }

    pub fn with_link_uid(mut self, link_uid: Option<String>) -> Self {
        self.link_uid = link_uid.filter(|u| !u.is_empty());
        self
    }
}

impl std::fmt::Debug for OAuthCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCallback")
            .field("code_len", &self.code.len())
            .field("redirect_uri", &self.redirect_uri)
            .field("has_code_verifier", &self.code_verifier.is_some())
            .field("link_uid", &self.link_uid)
            .finish()
    }
}
