pub mod identity_pool;
