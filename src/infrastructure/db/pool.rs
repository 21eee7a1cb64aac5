use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let mut connect_options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

    let pool_options =
        SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds));

    let pool_options = if config.is_in_memory() {
        // Every connection to an in-memory URL opens a fresh database, so the
        // pool must hold exactly one connection and never recycle it.
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        connect_options = connect_options.journal_mode(SqliteJournalMode::Wal);
        pool_options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
    };

    pool_options.connect_with(connect_options).await
}
