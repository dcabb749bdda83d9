//! Database access layer using sqlx with MySQL

pub mod cdr;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

/// Initialize the database connection pool.
///
/// Connections are established lazily: a database that is down at boot shows
/// up as a per-request load failure (and an empty dashboard) rather than a
/// server that refuses to start.
pub fn init_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
}
