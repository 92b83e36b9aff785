use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        // every connection would get its own private :memory: database
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    fed_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Number of rows in the binding index for one identity
pub async fn count_index_rows(pool: &SqlitePool, uid: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM identity_bindings WHERE uid = ?")
        .bind(uid)
        .fetch_one(pool)
        .await
        .expect("Failed to count binding rows")
}
