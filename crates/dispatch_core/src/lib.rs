//! Nearest-available-driver matching for a ride-hailing dispatch engine.
//!
//! The crate exposes one operation, [`find_closest_driver`]: given a snapshot
//! of driver records, a pickup point, and an optional vehicle category, pick
//! the closest available driver by haversine distance. The matcher is pure
//! and stateless; it performs no I/O and the caller owns all concurrency
//! control over the driver registry itself.

pub mod candidate;
pub mod error;
pub mod geo;
pub mod matching;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use serde_json::Value;

pub use candidate::{Availability, DriverCandidate};
pub use error::MatchError;
pub use geo::Coordinate;
pub use matching::{
    DispatchAlgorithm, DriverMatch, MatchOutcome, MatchRequest, NearestDriverMatching,
};

/// Decode a raw pickup object (`{"lat": .., "lng"/"lon": ..}`) into a
/// validated coordinate. Missing or non-numeric fields surface as
/// [`MatchError::InvalidPickup`], unlike candidate locations which decode
/// tolerantly to `None`.
pub fn decode_pickup(value: &Value) -> Result<Coordinate, MatchError> {
    let lat = value.get("lat").and_then(Value::as_f64).unwrap_or(f64::NAN);
    let lng = value
        .get("lng")
        .or_else(|| value.get("lon"))
        .and_then(Value::as_f64)
        .unwrap_or(f64::NAN);
    Coordinate::new(lat, lng)
}

/// Find the closest available driver for one pickup.
///
/// Returns `Ok(MatchOutcome::NoMatch)` when no eligible driver exists (a
/// normal outcome) and `Err(MatchError::InvalidPickup)` only when the pickup
/// coordinate itself is missing or out of range. Malformed per-candidate
/// data is skipped, never fatal.
pub fn find_closest_driver(
    candidates: &[DriverCandidate],
    pickup: &Value,
    vehicle_category: Option<&str>,
) -> Result<MatchOutcome, MatchError> {
    let pickup = decode_pickup(pickup)?;
    let mut request = MatchRequest::new("", pickup);
    if let Some(category) = vehicle_category {
        request = request.with_category(category);
    }
    Ok(NearestDriverMatching.find_match(&request, candidates))
}
