pub mod identity;
pub mod identity_document;
pub mod provider_binding;
pub mod provider_kind;
pub mod verified_profile;
