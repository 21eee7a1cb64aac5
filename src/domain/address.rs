use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::geo::GeoPoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Address {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// An address book entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewAddress {
    pub fn with_id(self, id: i64) -> Address {
        Address {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// What update and delete do when no entry has the requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingIdPolicy {
    /// Report success and leave the store untouched.
    #[default]
    Ignore,
    /// Report the entry as not found.
    NotFound,
}
