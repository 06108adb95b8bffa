use crate::candidate::DriverCandidate;
use crate::geo::Coordinate;

/// One ride request as seen by the matcher: where to pick up, and which
/// vehicle category the rider asked for (`None` means any).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRequest {
    pub request_id: String,
    pub pickup: Coordinate,
    pub vehicle_category: Option<String>,
}

impl MatchRequest {
    pub fn new(request_id: impl Into<String>, pickup: Coordinate) -> Self {
        Self {
            request_id: request_id.into(),
            pickup,
            vehicle_category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.vehicle_category = Some(category.into());
        self
    }
}

/// A selected driver together with the pickup distance that won them the
/// match.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverMatch {
    pub driver: DriverCandidate,
    pub distance_km: f64,
}

/// Outcome of a single match attempt. `NoMatch` is a normal result, not an
/// error: it means no eligible driver exists right now.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Matched(DriverMatch),
    NoMatch,
}

impl MatchOutcome {
    pub fn matched(&self) -> Option<&DriverMatch> {
        match self {
            MatchOutcome::Matched(m) => Some(m),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchOutcome::NoMatch)
    }
}

/// A successful pairing from a batch run, correlated back to its request.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchMatch {
    pub request_id: String,
    pub driver_id: String,
    pub distance_km: f64,
}
