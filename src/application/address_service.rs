use std::sync::Arc;

use tracing::{debug, info};

use crate::api::dtos::{AddressRequest, AddressResponse, DeletedAddressResponse, RadiusSearch};
use crate::domain::{DistanceFormula, DomainError, MissingIdPolicy};
use crate::error::AppResult;
use crate::infrastructure::repositories::AddressRepository;

#[derive(Clone)]
pub struct AddressService {
    address_repo: Arc<dyn AddressRepository>,
    distance_formula: DistanceFormula,
    missing_id_policy: MissingIdPolicy,
}

impl AddressService {
    pub fn new(address_repo: Arc<dyn AddressRepository>) -> Self {
        Self {
            address_repo,
            distance_formula: DistanceFormula::default(),
            missing_id_policy: MissingIdPolicy::default(),
        }
    }

    pub fn with_distance_formula(mut self, distance_formula: DistanceFormula) -> Self {
        self.distance_formula = distance_formula;
        self
    }

    pub fn with_missing_id_policy(mut self, missing_id_policy: MissingIdPolicy) -> Self {
        self.missing_id_policy = missing_id_policy;
        self
    }

    pub async fn list(&self) -> AppResult<Vec<AddressResponse>> {
        let addresses = self.address_repo.list().await?;
        Ok(addresses.into_iter().map(AddressResponse::from).collect())
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.address_repo.count().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<AddressResponse> {
        self.address_repo
            .find_by_id(id)
            .await?
            .map(AddressResponse::from)
            .ok_or_else(|| not_found(id).into())
    }

    pub async fn create(&self, request: AddressRequest) -> AppResult<AddressResponse> {
        let entry = request.into_new_address()?;
        let id = self.address_repo.create(&entry).await?;
        info!(address_id = id, "address book entry created");
        Ok(entry.with_id(id).into())
    }

    /// Replaces every field of entry `id`. The response echoes the submitted
    /// fields whether or not a row matched, unless the policy is `NotFound`.
    pub async fn update(&self, id: i64, request: AddressRequest) -> AppResult<AddressResponse> {
        let entry = request.into_new_address()?;
        let matched = self.address_repo.update(id, &entry).await?;
        self.check_matched(id, matched)?;
        Ok(entry.with_id(id).into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeletedAddressResponse> {
        let matched = self.address_repo.delete(id).await?;
        self.check_matched(id, matched)?;
        Ok(DeletedAddressResponse { id })
    }

    /// Every stored entry within `radius_km` of the centre, in store order.
    pub async fn find_within_radius(&self, search: RadiusSearch) -> AppResult<Vec<AddressResponse>> {
        let radius_km = search.radius_km as f64;
        let addresses = self.address_repo.list().await?;
        let scanned = addresses.len();

        let matches: Vec<AddressResponse> = addresses
            .into_iter()
            .filter(|address| {
                self.distance_formula
                    .distance_km(search.center, address.location())
                    <= radius_km
            })
            .map(AddressResponse::from)
            .collect();

        debug!(
            scanned,
            matched = matches.len(),
            radius_km = search.radius_km,
            formula = ?self.distance_formula,
            "proximity search finished"
        );
        Ok(matches)
    }

    fn check_matched(&self, id: i64, matched: bool) -> Result<(), DomainError> {
        match (matched, self.missing_id_policy) {
            (true, _) | (false, MissingIdPolicy::Ignore) => Ok(()),
            (false, MissingIdPolicy::NotFound) => Err(not_found(id)),
        }
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::NotFound(format!("address {id} not found"))
}
