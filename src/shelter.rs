use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::within_radius;
use crate::models::{Coordinates, ShelterRecord};

/// Radius of the "nearby shelters" view (km).
pub const NEARBY_RADIUS_KM: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyStatus {
    Available,
    Moderate,
    HighCapacity,
    NearCapacity,
}

/// Fraction of capacity in use. Can exceed 1.0 when a shelter is overfull.
pub fn occupancy_ratio(shelter: &ShelterRecord) -> f64 {
    if shelter.capacity == 0 {
        return 0.0;
    }
    shelter.occupancy as f64 / shelter.capacity as f64
}

pub fn occupancy_status(shelter: &ShelterRecord) -> OccupancyStatus {
    let pct = occupancy_ratio(shelter) * 100.0;
    if pct >= 90.0 {
        OccupancyStatus::NearCapacity
    } else if pct >= 75.0 {
        OccupancyStatus::HighCapacity
    } else if pct >= 50.0 {
        OccupancyStatus::Moderate
    } else {
        OccupancyStatus::Available
    }
}

pub fn remaining_beds(shelter: &ShelterRecord) -> u32 {
    shelter.capacity.saturating_sub(shelter.occupancy)
}

pub fn matches_search(shelter: &ShelterRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    shelter.name.to_lowercase().contains(&term) || shelter.address.to_lowercase().contains(&term)
}

/// Shelters matching `term` that lie within `radius_km` of the user.
///
/// Unlike `geo::filter_by_radius`, an unknown location yields nothing:
/// "nearby" has no meaning without one.
pub fn nearby_shelters<'a>(
    shelters: &'a [ShelterRecord],
    center: Option<&Coordinates>,
    radius_km: f64,
    term: &str,
) -> Vec<&'a ShelterRecord> {
    let Some(center) = center else {
        debug!("no user location, nearby shelter list is empty");
        return Vec::new();
    };
    shelters
        .iter()
        .filter(|s| matches_search(s, term))
        .filter(|s| within_radius(center, &s.coordinates, radius_km))
        .collect()
}
