use std::fmt;

/// Issued session: who signed in and the signed token to present later.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionGrant {
    pub uid: String,
    pub email: String,
    pub session_token: String,
}

impl fmt::Debug for SessionGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGrant")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("session_token", &"[REDACTED]")
            .finish()
    }
}
