pub mod algorithm;
pub mod nearest;
pub mod types;

pub use algorithm::DispatchAlgorithm;
pub use nearest::NearestDriverMatching;
pub use types::{BatchMatch, DriverMatch, MatchOutcome, MatchRequest};
