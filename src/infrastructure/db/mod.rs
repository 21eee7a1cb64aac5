pub mod pool;
pub mod schema;

use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Opens the store: builds the pool and makes sure the table exists.
pub async fn open(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = pool::create_pool(config).await?;
    schema::ensure_schema(&pool).await?;
    info!(in_memory = config.is_in_memory(), "address book store opened");
    Ok(pool)
}

/// Waits for in-flight queries and closes every pooled connection.
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    info!("address book store closed");
}
