use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::domain::{Address, NewAddress};
use crate::error::AppResult;

use super::traits::AddressRepository;

pub struct AddressRepositoryImpl {
    pool: SqlitePool,
}

impl AddressRepositoryImpl {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT id, name, address, phone, latitude, longitude FROM address_book ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(addresses)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(
            "SELECT id, name, address, phone, latitude, longitude FROM address_book WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(address)
    }

    async fn create(&self, entry: &NewAddress) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO address_book (name, address, phone, latitude, longitude)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.name)
        .bind(&entry.address)
        .bind(&entry.phone)
        .bind(entry.latitude)
        .bind(entry.longitude)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(address_id = id, "address created");
        Ok(id)
    }

    async fn update(&self, id: i64, entry: &NewAddress) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE address_book
            SET name = ?, address = ?, phone = ?, latitude = ?, longitude = ?
            WHERE id = ?
            "#,
        )
        .bind(&entry.name)
        .bind(&entry.address)
        .bind(&entry.phone)
        .bind(entry.latitude)
        .bind(entry.longitude)
        .bind(id)
        .execute(&self.pool)
        .await?;

        let matched = result.rows_affected() > 0;
        debug!(address_id = id, matched, "address updated");
        Ok(matched)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM address_book WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let matched = result.rows_affected() > 0;
        debug!(address_id = id, matched, "address deleted");
        Ok(matched)
    }

    async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM address_book")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
