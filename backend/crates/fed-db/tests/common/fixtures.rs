use fed_core::{DEFAULT_USER_COLOR, Identity, ProviderKind};

/// Unsaved password identity whose uid is the backend-issued id
pub fn password_identity(uid: &str, email: &str) -> Identity {
    let mut identity = Identity::new(uid, DEFAULT_USER_COLOR);
    identity.add_binding(ProviderKind::Password, uid, email);
    identity
}

/// Unsaved identity created by a first OAuth login
pub fn oauth_identity(kind: ProviderKind, provider_uid: &str, email: &str) -> Identity {
    let mut identity = Identity::new(
        format!("{}_{}", kind.as_str(), provider_uid),
        DEFAULT_USER_COLOR,
    );
    identity.add_binding(kind, provider_uid, email);
    identity
}
