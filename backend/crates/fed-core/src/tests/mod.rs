mod provider_kind;
mod verified_profile;
