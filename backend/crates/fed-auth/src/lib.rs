pub mod authenticated_principal;
pub mod claims;
pub mod error;
pub mod login_rate_limiter;
pub mod rate_limit_config;
pub mod session_issuer;
pub mod session_validator;

pub use authenticated_principal::AuthenticatedPrincipal;
pub use claims::SessionClaims;
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use rate_limit_config::LoginRateLimitConfig;
pub use session_issuer::{DEFAULT_SESSION_TTL_SECS, SessionIssuer};
pub use session_validator::SessionValidator;
