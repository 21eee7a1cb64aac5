pub mod address;
pub mod errors;
pub mod geo;

pub use address::{Address, MissingIdPolicy, NewAddress};
pub use errors::DomainError;
pub use geo::{DistanceFormula, GeoPoint};
