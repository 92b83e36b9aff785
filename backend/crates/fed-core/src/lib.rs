pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity::{Identity, ProviderBindings};
pub use models::identity_document::{EmailEntry, IdentityDocument, ProviderEntry};
pub use models::provider_binding::ProviderBinding;
pub use models::provider_kind::ProviderKind;
pub use models::verified_profile::VerifiedProfile;
pub use validation::{normalize_email, validate_color, validate_user_name};

/// Colour assigned to identities that never chose one.
pub const DEFAULT_USER_COLOR: &str = "#3b82f6";

/// Longest display name accepted on a profile update.
pub const MAX_USER_NAME_LENGTH: usize = 100;

#[cfg(test)]
mod tests;
