use crate::candidate::DriverCandidate;
use crate::geo::distance_km;

use super::algorithm::DispatchAlgorithm;
use super::types::{DriverMatch, MatchOutcome, MatchRequest};

/// Nearest-driver matching: linear scan for the eligible candidate with the
/// minimum haversine distance to the pickup point.
///
/// Eligibility requires availability and, when the request names a vehicle
/// category, an exact case-sensitive category match. Candidates without a
/// usable location are skipped silently during the scan; they can never win
/// a match but never fail one either.
///
/// Ties are broken first-seen-wins: a candidate only replaces the running
/// best on a strictly smaller distance, so equal-distance candidates resolve
/// to the earliest one in the snapshot, every run.
#[derive(Debug, Default)]
pub struct NearestDriverMatching;

/// Eligibility rule shared by the scan: available, and category-compatible
/// with the request.
pub fn is_eligible(candidate: &DriverCandidate, requested_category: Option<&str>) -> bool {
    candidate.is_available()
        && requested_category
            .map(|category| candidate.vehicle_category == category)
            .unwrap_or(true)
}

impl DispatchAlgorithm for NearestDriverMatching {
    fn find_match(&self, request: &MatchRequest, candidates: &[DriverCandidate]) -> MatchOutcome {
        let requested_category = request.vehicle_category.as_deref();
        let mut best: Option<(&DriverCandidate, f64)> = None;

        for candidate in candidates {
            if !is_eligible(candidate, requested_category) {
                continue;
            }
            // No usable location: skipped here, not in the eligibility rule.
            let Some(location) = candidate.location else {
                continue;
            };
            let dist = distance_km(request.pickup, location);
            match best {
                None => best = Some((candidate, dist)),
                Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
                _ => {}
            }
        }

        match best {
            Some((driver, dist)) => MatchOutcome::Matched(DriverMatch {
                driver: driver.clone(),
                distance_km: dist,
            }),
            None => MatchOutcome::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Availability;
    use crate::test_helpers::{pickup_ben_thanh, test_driver, test_driver_at_km};

    fn nearest(request: &MatchRequest, candidates: &[DriverCandidate]) -> MatchOutcome {
        NearestDriverMatching.find_match(request, candidates)
    }

    #[test]
    fn no_available_driver_yields_no_match() {
        let mut driver = test_driver_at_km("d1", "car", 1.0);
        driver.availability = Availability::Unavailable;
        let request = MatchRequest::new("r1", pickup_ben_thanh());
        assert!(nearest(&request, &[driver]).is_no_match());
    }

    #[test]
    fn category_mismatch_yields_no_match() {
        let drivers = vec![
            test_driver_at_km("d1", "bike", 1.0),
            test_driver_at_km("d2", "bike", 2.0),
        ];
        let request = MatchRequest::new("r1", pickup_ben_thanh()).with_category("car");
        assert!(nearest(&request, &drivers).is_no_match());
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let drivers = vec![test_driver_at_km("d1", "Car", 1.0)];
        let request = MatchRequest::new("r1", pickup_ben_thanh()).with_category("car");
        assert!(nearest(&request, &drivers).is_no_match());
    }

    #[test]
    fn no_requested_category_matches_any() {
        let drivers = vec![
            test_driver_at_km("bike", "bike", 3.0),
            test_driver_at_km("car", "car", 1.0),
        ];
        let request = MatchRequest::new("r1", pickup_ben_thanh());
        let outcome = nearest(&request, &drivers);
        assert_eq!(outcome.matched().expect("should match").driver.id, "car");
    }

    #[test]
    fn selects_minimum_distance_driver() {
        let drivers = vec![
            test_driver_at_km("far", "car", 5.0),
            test_driver_at_km("near", "car", 2.0),
            test_driver_at_km("farther", "car", 8.0),
        ];
        let request = MatchRequest::new("r1", pickup_ben_thanh()).with_category("car");
        let m = nearest(&request, &drivers);
        let m = m.matched().expect("should match");
        assert_eq!(m.driver.id, "near");
        assert!((m.distance_km - 2.0).abs() < 0.05, "got {} km", m.distance_km);
    }

    #[test]
    fn equal_distance_keeps_first_seen() {
        // Same coordinates, so identical computed distance.
        let first = test_driver_at_km("first", "car", 2.0);
        let mut second = first.clone();
        second.id = "second".to_string();
        let request = MatchRequest::new("r1", pickup_ben_thanh());
        for _ in 0..10 {
            let outcome = nearest(&request, &[first.clone(), second.clone()]);
            assert_eq!(outcome.matched().expect("should match").driver.id, "first");
        }
    }

    #[test]
    fn missing_location_is_skipped_not_fatal() {
        let drivers = vec![
            test_driver("no_loc", "car", None),
            test_driver_at_km("located", "car", 4.0),
        ];
        let request = MatchRequest::new("r1", pickup_ben_thanh()).with_category("car");
        let outcome = nearest(&request, &drivers);
        assert_eq!(outcome.matched().expect("should match").driver.id, "located");
    }

    #[test]
    fn only_unlocated_candidates_yields_no_match() {
        let drivers = vec![test_driver("d1", "car", None)];
        let request = MatchRequest::new("r1", pickup_ben_thanh());
        assert!(nearest(&request, &drivers).is_no_match());
    }

    #[test]
    fn batch_correlates_results_by_request_id() {
        let drivers = vec![
            test_driver_at_km("car_driver", "car", 1.0),
            test_driver_at_km("bike_driver", "bike", 2.0),
        ];
        let requests = vec![
            MatchRequest::new("wants_car", pickup_ben_thanh()).with_category("car"),
            MatchRequest::new("wants_van", pickup_ben_thanh()).with_category("van"),
            MatchRequest::new("wants_any", pickup_ben_thanh()),
        ];
        let matches = NearestDriverMatching.find_batch_matches(&requests, &drivers);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].request_id, "wants_car");
        assert_eq!(matches[0].driver_id, "car_driver");
        assert_eq!(matches[1].request_id, "wants_any");
        assert_eq!(matches[1].driver_id, "car_driver");
    }
}
