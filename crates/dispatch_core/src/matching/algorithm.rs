use crate::candidate::DriverCandidate;

use super::types::{BatchMatch, MatchOutcome, MatchRequest};

/// Trait for dispatch policies that pair a ride request with a driver.
///
/// Implementations are pure: they read the candidate snapshot for the
/// duration of one call and hold no state between calls. Claiming a matched
/// driver (flipping availability) belongs to the caller.
pub trait DispatchAlgorithm: Send + Sync {
    /// Find the best driver for a single request, or `NoMatch` if no
    /// eligible driver exists in the snapshot.
    fn find_match(&self, request: &MatchRequest, candidates: &[DriverCandidate]) -> MatchOutcome;

    /// Find matches for multiple requests against one shared snapshot.
    /// Default implementation matches each request independently; every
    /// request sees the full snapshot, so the same driver can appear in more
    /// than one result. Deduplicating claims is the orchestrator's job.
    fn find_batch_matches(
        &self,
        requests: &[MatchRequest],
        candidates: &[DriverCandidate],
    ) -> Vec<BatchMatch> {
        requests
            .iter()
            .filter_map(|request| {
                self.find_match(request, candidates)
                    .matched()
                    .map(|m| BatchMatch {
                        request_id: request.request_id.clone(),
                        driver_id: m.driver.id.clone(),
                        distance_km: m.distance_km,
                    })
            })
            .collect()
    }
}
