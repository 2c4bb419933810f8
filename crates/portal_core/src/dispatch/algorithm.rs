use crate::fleet::Ambulance;
use crate::grid::Coordinate;

/// Trait for dispatch algorithms that select a unit for an emergency
/// request.
///
/// Implementations are pure: they read the roster, never mutate it, and
/// return an annotated copy of the selected unit. Status transitions (e.g.
/// marking the unit `Dispatched`) belong to the caller.
pub trait DispatchAlgorithm: Send + Sync {
    /// Select a unit for a requester at `requester`.
    ///
    /// # Arguments
    ///
    /// * `requester` - Grid location of the emergency request.
    /// * `units` - The current roster; may be empty. Only `Available`
    ///   units are eligible.
    ///
    /// # Returns
    ///
    /// `Some(unit)` with `distance_km` and `eta_minutes` populated, or
    /// `None` when no unit is currently available. `None` is an expected,
    /// recoverable outcome, never a fault.
    fn find_nearest(&self, requester: Coordinate, units: &[Ambulance]) -> Option<Ambulance>;
}
