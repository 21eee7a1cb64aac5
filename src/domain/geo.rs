use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Which arithmetic the proximity filter uses to measure distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceFormula {
    /// Great-circle distance, `2R * asin(sqrt(a))`.
    #[default]
    Haversine,
    /// `2R * asin(a)` with no square root. Only close to the true distance for
    /// tiny separations; it reproduces the filter results of older deployments.
    Compat,
}

impl DistanceFormula {
    pub fn distance_km(self, from: GeoPoint, to: GeoPoint) -> f64 {
        match self {
            DistanceFormula::Haversine => haversine_km(from, to),
            DistanceFormula::Compat => compat_km(from, to),
        }
    }
}

/// Squared half-chord between two points on the unit sphere, clamped to
/// `[0, 1]` so float error near antipodes never reaches `asin` out of domain.
fn half_chord_squared(from: GeoPoint, to: GeoPoint) -> f64 {
    let p = DEGREES_TO_RADIANS;
    let a = 0.5 - ((to.latitude - from.latitude) * p).cos() / 2.0
        + (from.latitude * p).cos()
            * (to.latitude * p).cos()
            * (1.0 - ((to.longitude - from.longitude) * p).cos())
            / 2.0;
    a.clamp(0.0, 1.0)
}

pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    2.0 * EARTH_RADIUS_KM * half_chord_squared(from, to).sqrt().asin()
}

pub fn compat_km(from: GeoPoint, to: GeoPoint) -> f64 {
    2.0 * EARTH_RADIUS_KM * half_chord_squared(from, to).asin()
}

/// Great-circle distance in kilometres between two latitude/longitude pairs.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_km(GeoPoint::new(lat1, lon1), GeoPoint::new(lat2, lon2))
}
