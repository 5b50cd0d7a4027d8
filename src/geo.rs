use tracing::debug;

use crate::models::{Coordinates, Located};

/// Mean Earth radius used by the haversine formula (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance between two points in kilometres.
///
/// Total over all finite inputs; out-of-range coordinates are not rejected.
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let d_lat = to_radians(b.latitude - a.latitude);
    let d_lon = to_radians(b.longitude - a.longitude);
    let h = (d_lat / 2.0).sin().powi(2)
        + to_radians(a.latitude).cos() * to_radians(b.latitude).cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h just past 1 near antipodes.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

pub fn within_radius(center: &Coordinates, point: &Coordinates, radius_km: f64) -> bool {
    distance_km(center, point) <= radius_km
}

/// Keep the records within `radius_km` of `center`, in input order.
///
/// Without a center there is nothing to measure against and every record
/// is returned.
pub fn filter_by_radius<'a, T: Located>(
    records: &'a [T],
    center: Option<&Coordinates>,
    radius_km: f64,
) -> Vec<&'a T> {
    let Some(center) = center else {
        return records.iter().collect();
    };
    let kept: Vec<&T> = records
        .iter()
        .filter(|r| within_radius(center, &r.coordinates(), radius_km))
        .collect();
    debug!(total = records.len(), kept = kept.len(), radius_km, "radius filter applied");
    kept
}

/// Pair every record with its distance from `center`, nearest first.
/// Equal distances keep input order.
pub fn sort_by_distance<'a, T: Located>(records: &'a [T], center: &Coordinates) -> Vec<(&'a T, f64)> {
    let mut ranked: Vec<(&T, f64)> = records
        .iter()
        .map(|r| (r, distance_km(center, &r.coordinates())))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}

pub fn nearest<'a, T: Located>(records: &'a [T], center: &Coordinates) -> Option<(&'a T, f64)> {
    sort_by_distance(records, center).into_iter().next()
}
