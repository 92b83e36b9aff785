use fed_core::{Identity, ProviderKind};

/// One linked sign-in method as shown on a profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDetail {
    pub kind: ProviderKind,
    pub email: String,
    pub display_name: String,
    pub is_linked: bool,
}

impl ProviderDetail {
    /// One entry per binding, in precedence then insertion order
    pub fn for_identity(identity: &Identity) -> Vec<ProviderDetail> {
        identity
            .bindings
            .iter()
            .map(|(kind, binding)| ProviderDetail {
                kind,
                email: binding.email.clone(),
                display_name: kind.display_name().to_string(),
                is_linked: true,
            })
            .collect()
    }
}

/// Profile fields plus the sign-in methods behind them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileView {
    pub user_name: String,
    pub user_color: String,
    pub providers: Vec<ProviderKind>,
    pub provider_details: Vec<ProviderDetail>,
}

impl From<&Identity> for UserProfileView {
    fn from(identity: &Identity) -> Self {
        Self {
            user_name: identity.user_name.clone(),
            user_color: identity.user_color.clone(),
            providers: identity.linked_kinds(),
            provider_details: ProviderDetail::for_identity(identity),
        }
    }
}
