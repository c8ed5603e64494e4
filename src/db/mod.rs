use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub mod catalog_repository;
pub mod memory_repo;
pub mod seed;
pub mod sqlite_repo;

pub use catalog_repository::CatalogRepository;
pub use memory_repo::MemoryCatalogRepository;
pub use seed::CatalogSeed;
pub use sqlite_repo::SqliteCatalogRepository;

/// Open a SQLite pool, creating the database file when it does not exist.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // Each connection to an in-memory database sees its own empty database
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}
