pub mod connection;
pub mod error;
pub mod identity_store;
pub mod repositories;

pub use connection::identity_pool::{IdentityPoolOptions, open_pool};
pub use error::{DbError, Result};
pub use identity_store::IdentityStore;
pub use repositories::identity_repository::IdentityRepository;

use sqlx::migrate::Migrator;

/// Schema for the identity store, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
