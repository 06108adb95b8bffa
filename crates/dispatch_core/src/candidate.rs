//! Driver candidate model and tolerant decoding of raw registry records.
//!
//! The external driver registry hands over flat JSON rows. Those rows are
//! inconsistent in a few known ways: longitude appears under either `lng` or
//! `lon`, availability is a bare boolean, ids may be numbers, and location
//! values are occasionally junk. Decoding salvages whatever is usable and
//! drops the rest without failing the whole batch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geo::Coordinate;

/// Whether a driver can currently take a ride. The two states are mutually
/// exclusive; there is no "busy but interruptible" middle ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

/// A snapshot of one driver as seen by the matcher.
///
/// The location is optional: registry rows without a usable coordinate still
/// decode, they just can never win a match.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverCandidate {
    pub id: String,
    pub availability: Availability,
    pub vehicle_category: String,
    pub location: Option<Coordinate>,
}

impl DriverCandidate {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Decode a batch of raw registry rows, dropping rows that lack an id or a
/// vehicle category. Row order is preserved; it feeds the first-seen-wins
/// tie-break downstream.
pub fn decode_candidates(rows: &[Value]) -> Vec<DriverCandidate> {
    rows.iter().filter_map(decode_candidate).collect()
}

/// Decode a single raw registry row, or `None` if the row is unusable.
pub fn decode_candidate(row: &Value) -> Option<DriverCandidate> {
    let id = decode_id(row.get("id")?)?;
    let vehicle_category = row
        .get("vehicle_category")
        .or_else(|| row.get("vehicle_info"))
        .and_then(Value::as_str)?
        .to_string();
    let availability = match row.get("available").and_then(Value::as_bool) {
        Some(true) => Availability::Available,
        _ => Availability::Unavailable,
    };
    Some(DriverCandidate {
        id,
        availability,
        vehicle_category,
        location: row.get("location").and_then(decode_location),
    })
}

fn decode_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract a coordinate from a raw location object. Longitude is accepted
/// under both `lng` and `lon` (upstream producers disagree on the key; `lng`
/// wins when both are present). Non-numeric or out-of-range values yield
/// `None` rather than an error.
pub fn decode_location(value: &Value) -> Option<Coordinate> {
    let lat = value.get("lat").and_then(Value::as_f64)?;
    let lng = value
        .get("lng")
        .or_else(|| value.get("lon"))
        .and_then(Value::as_f64)?;
    Coordinate::new(lat, lng).ok()
}
