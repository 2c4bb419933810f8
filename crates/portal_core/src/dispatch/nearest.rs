use std::cmp::Ordering;

use crate::fleet::Ambulance;
use crate::grid::{distance_between, Coordinate};

use super::algorithm::DispatchAlgorithm;

/// Linear speed model: minutes of travel per grid unit of distance
/// (~1.25 units per minute).
const ETA_MINUTES_PER_UNIT: f64 = 0.8;

/// Nearest-available dispatch: straight-line distance over the whole
/// roster.
///
/// 1. Keeps `Available` units, preserving roster order.
/// 2. Computes the Euclidean distance from the requester to each candidate.
/// 3. Sorts ascending by distance; equal distances fall back to ascending
///    unit ID, so results are deterministic regardless of roster order.
/// 4. Returns a copy of the closest unit annotated with the distance
///    (rounded to two decimals) and an ETA of `ceil(distance * 0.8)`
///    minutes. The ETA is derived from the unrounded distance.
///
/// O(n log n) in the candidate count; the roster itself is untouched.
#[derive(Debug, Default)]
pub struct NearestAvailable;

impl DispatchAlgorithm for NearestAvailable {
    fn find_nearest(&self, requester: Coordinate, units: &[Ambulance]) -> Option<Ambulance> {
        let mut candidates: Vec<(f64, &Ambulance)> = units
            .iter()
            .filter(|unit| unit.is_available())
            .map(|unit| (distance_between(requester, unit.location), unit))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        candidates.sort_by(|(dist_a, unit_a), (dist_b, unit_b)| {
            dist_a
                .partial_cmp(dist_b)
                .unwrap_or(Ordering::Equal)
                .then_with(|| unit_a.id.cmp(&unit_b.id))
        });

        let (distance, nearest) = candidates[0];
        let mut matched = nearest.clone();
        matched.distance_km = Some((distance * 100.0).round() / 100.0);
        matched.eta_minutes = Some((distance * ETA_MINUTES_PER_UNIT).ceil() as u32);
        Some(matched)
    }
}
