//! Test helpers for common fixture setup.
//!
//! Coordinates are real Saigon landmarks matching the upstream registry's
//! seed data, so distances in tests line up with the haversine regression
//! fixture.

use crate::candidate::{Availability, DriverCandidate};
use crate::geo::{Coordinate, EARTH_RADIUS_KM};

/// Bến Thành market, the standard pickup point used across tests.
pub fn pickup_ben_thanh() -> Coordinate {
    Coordinate::new(10.762622, 106.660172).expect("fixture coordinate should be valid")
}

/// Hồ Con Rùa, about 4.06 km from Bến Thành.
pub fn landmark_ho_con_rua() -> Coordinate {
    Coordinate::new(10.7798, 106.6992).expect("fixture coordinate should be valid")
}

/// An available driver with the given id, category, and location.
pub fn test_driver(
    id: &str,
    category: &str,
    location: Option<Coordinate>,
) -> DriverCandidate {
    DriverCandidate {
        id: id.to_string(),
        availability: Availability::Available,
        vehicle_category: category.to_string(),
        location,
    }
}

/// An available driver placed `km` kilometers due north of the Bến Thành
/// pickup. Along a meridian the haversine distance is exactly the arc
/// length, so the requested distance is hit precisely.
pub fn test_driver_at_km(id: &str, category: &str, km: f64) -> DriverCandidate {
    let degrees_per_km = 360.0 / (2.0 * std::f64::consts::PI * EARTH_RADIUS_KM);
    let base = pickup_ben_thanh();
    let location = Coordinate::new(base.lat() + km * degrees_per_km, base.lng())
        .expect("offset coordinate should stay in range");
    test_driver(id, category, Some(location))
}
