use std::fmt;

/// Errors surfaced by the matcher. Per-candidate data problems are never
/// errors; only a bad pickup coordinate fails a call.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchError {
    /// Pickup coordinate missing, non-finite, or outside valid degree ranges.
    InvalidPickup { lat: f64, lng: f64 },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidPickup { lat, lng } => {
                write!(f, "invalid pickup coordinate ({lat}, {lng})")
            }
        }
    }
}

impl std::error::Error for MatchError {}
