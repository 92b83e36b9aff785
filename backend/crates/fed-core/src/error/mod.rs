use crate::{ErrorLocation, ProviderKind};

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Unknown provider: {value} {location}")]
    UnknownProvider {
        value: String,
        location: ErrorLocation,
    },

    #[error("Provider {kind} is not linked {location}")]
    ProviderNotLinked {
        kind: ProviderKind,
        location: ErrorLocation,
    },

    #[error("Cannot remove the last sign-in method {location}")]
    LastBinding { location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
