use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Address, DomainError, GeoPoint, NewAddress};
use crate::error::{AppError, AppResult, ValidationIssue};

/// Body of create and update requests. Fields are optional at the serde level
/// so that every missing field is reported at once by `validate`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    #[validate(required)]
    #[schema(value_type = String)]
    pub name: Option<String>,

    #[validate(required)]
    #[schema(value_type = String)]
    pub address: Option<String>,

    #[validate(required)]
    #[schema(value_type = String)]
    pub phone: Option<String>,

    #[validate(
        required,
        range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90")
    )]
    #[schema(value_type = f64)]
    pub latitude: Option<f64>,

    #[validate(
        required,
        range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180")
    )]
    #[schema(value_type = f64)]
    pub longitude: Option<f64>,
}

impl AddressRequest {
    /// Validates the payload and turns it into an entry ready for the store.
    pub fn into_new_address(self) -> AppResult<NewAddress> {
        self.validate()?;

        Ok(NewAddress {
            name: required(self.name, "name")?,
            address: required(self.address, "address")?,
            phone: required(self.phone, "phone")?,
            latitude: required(self.latitude, "latitude")?,
            longitude: required(self.longitude, "longitude")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::ValidationError(format!("{field} is required")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddressResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            name: address.name,
            address: address.address,
            phone: address.phone,
            latitude: address.latitude,
            longitude: address.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedAddressResponse {
    pub id: i64,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DistanceQuery {
    /// Latitude of the query point, in degrees.
    #[validate(
        required,
        range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90")
    )]
    #[param(value_type = f64)]
    pub lat: Option<f64>,

    /// Longitude of the query point, in degrees.
    #[validate(
        required,
        range(min = -180.0, max = 180.0, message = "lon must be between -180 and 180")
    )]
    #[param(value_type = f64)]
    pub lon: Option<f64>,

    /// Search radius in whole kilometres.
    #[validate(required, range(min = 0, message = "distance must not be negative"))]
    #[param(value_type = i64)]
    pub distance: Option<i64>,
}

/// A validated proximity query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusSearch {
    pub center: GeoPoint,
    pub radius_km: i64,
}

impl DistanceQuery {
    pub fn into_search(self) -> AppResult<RadiusSearch> {
        self.ensure_finite()?;
        self.validate()?;

        Ok(RadiusSearch {
            center: GeoPoint::new(required(self.lat, "lat")?, required(self.lon, "lon")?),
            radius_km: required(self.distance, "distance")?,
        })
    }

    /// `range` lets NaN through since every comparison with it is false.
    fn ensure_finite(&self) -> AppResult<()> {
        let mut issues: Vec<ValidationIssue> = [("lat", self.lat), ("lon", self.lon)]
            .into_iter()
            .filter(|(_, value)| value.is_some_and(|value| !value.is_finite()))
            .map(|(field, _)| {
                ValidationIssue::new(field, format!("{field} must be a finite number"), "finite")
            })
            .collect();

        match issues.len() {
            0 => Ok(()),
            1 => Err(AppError::invalid_field(issues.remove(0))),
            _ => Err(AppError::ValidationError {
                message: "Request validation failed".to_string(),
                issues,
            }),
        }
    }
}
