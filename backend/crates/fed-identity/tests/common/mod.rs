#![allow(dead_code)]

mod fake_providers;
mod test_service;
mod test_store;

pub use fake_providers::*;
pub use test_service::*;
pub use test_store::*;
