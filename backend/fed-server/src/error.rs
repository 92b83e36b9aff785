use thiserror::Error;

/// Startup failures; request-time failures are [`crate::ApiError`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] fed_config::ConfigError),

    #[error("Session key setup failed: {0}")]
    SessionKey(#[from] fed_auth::AuthError),

    #[error("Provider client setup failed: {0}")]
    Provider(#[from] fed_providers::ProviderError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
