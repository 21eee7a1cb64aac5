use serde::Deserialize;

use crate::domain::{DistanceFormula, MissingIdPolicy};

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressBookConfig {
    #[serde(default)]
    pub distance_formula: DistanceFormula,
    #[serde(default)]
    pub missing_id_policy: MissingIdPolicy,
}
