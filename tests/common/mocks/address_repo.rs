#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use address_book::domain::{Address, NewAddress};
use address_book::error::{AppError, AppResult};
use address_book::infrastructure::repositories::AddressRepository;
use async_trait::async_trait;

/// Keeps entries in insertion order and hands out ids the way an
/// autoincrement table does: starting at 1 and never reused.
pub struct MockAddressRepo {
    pub addresses: Mutex<Vec<Address>>,
    next_id: AtomicI64,
}

impl Default for MockAddressRepo {
    fn default() -> Self {
        Self {
            addresses: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl MockAddressRepo {
    pub fn with_addresses(addresses: Vec<Address>) -> Self {
        let next_id = addresses.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            addresses: Mutex::new(addresses),
            next_id: AtomicI64::new(next_id),
        }
    }

    pub fn snapshot(&self) -> Vec<Address> {
        self.addresses
            .lock()
            .expect("addresses mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl AddressRepository for MockAddressRepo {
    async fn list(&self) -> AppResult<Vec<Address>> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Address>> {
        Ok(self
            .addresses
            .lock()
            .expect("addresses mutex poisoned")
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create(&self, entry: &NewAddress) -> AppResult<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.addresses
            .lock()
            .expect("addresses mutex poisoned")
            .push(entry.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, id: i64, entry: &NewAddress) -> AppResult<bool> {
        let mut addresses = self.addresses.lock().expect("addresses mutex poisoned");
        match addresses.iter_mut().find(|a| a.id == id) {
            Some(existing) => {
                *existing = entry.clone().with_id(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut addresses = self.addresses.lock().expect("addresses mutex poisoned");
        let before = addresses.len();
        addresses.retain(|a| a.id != id);
        Ok(addresses.len() != before)
    }
}

/// Every call fails as if the store were unreachable.
#[derive(Default)]
pub struct FailingAddressRepo;

fn unavailable() -> AppError {
    AppError::ServiceUnavailable {
        service: "database".to_string(),
        message: "store is unavailable".to_string(),
    }
}

#[async_trait]
impl AddressRepository for FailingAddressRepo {
    async fn list(&self) -> AppResult<Vec<Address>> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> AppResult<Option<Address>> {
        Err(unavailable())
    }

    async fn create(&self, _entry: &NewAddress) -> AppResult<i64> {
        Err(unavailable())
    }

    async fn update(&self, _id: i64, _entry: &NewAddress) -> AppResult<bool> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i64) -> AppResult<bool> {
        Err(unavailable())
    }
}
