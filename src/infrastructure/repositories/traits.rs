use async_trait::async_trait;

use crate::domain::{Address, NewAddress};
use crate::error::AppResult;

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Address>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Address>>;
    async fn create(&self, entry: &NewAddress) -> AppResult<i64>;
    /// Overwrites every field of the entry. Returns `false` when no entry has `id`.
    async fn update(&self, id: i64, entry: &NewAddress) -> AppResult<bool>;
    /// Returns `false` when no entry has `id`.
    async fn delete(&self, id: i64) -> AppResult<bool>;
    async fn count(&self) -> AppResult<i64> {
        Ok(self.list().await?.len() as i64)
    }
}
