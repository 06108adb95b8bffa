//! Geographic primitives: validated coordinates and haversine distance.
//!
//! Coordinates are plain latitude/longitude degree pairs as supplied by the
//! upstream driver registry; no projection or spatial index is involved.

use serde::Serialize;

use crate::error::MatchError;

/// Mean Earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated latitude/longitude pair in degrees. Construction goes
/// through [`Coordinate::new`]; the fields stay private so a value in hand
/// is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite values and values outside
    /// lat ∈ [-90, 90], lng ∈ [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, MatchError> {
        if !lat.is_finite() || !lng.is_finite() || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lng)
        {
            return Err(MatchError::InvalidPickup { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Haversine great-circle distance between two coordinates, in kilometers.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
