//! Test helpers for common test setup and utilities.

use bevy_ecs::prelude::World;

use crate::fleet::{Ambulance, Capability, UnitStatus};
use crate::grid::Coordinate;
use crate::scenario::{build_scenario, ScenarioParams};

/// An available basic unit at the given position, with generated
/// operator/plate fields.
pub fn available_unit(id: &str, x: f64, y: f64) -> Ambulance {
    unit_with_status(id, x, y, UnitStatus::Available)
}

/// A unit with an explicit status, for exercising filter behavior.
pub fn unit_with_status(id: &str, x: f64, y: f64, status: UnitStatus) -> Ambulance {
    Ambulance {
        id: id.to_string(),
        operator: format!("{id} crew"),
        plate: format!("TEST-{id}"),
        location: Coordinate::new(x, y),
        status,
        capability: Capability::Basic,
        distance_km: None,
        eta_minutes: None,
    }
}

/// A world built from the canonical demo scenario: five units, two
/// patients, requester at (50, 50), default latencies.
pub fn create_test_world() -> World {
    let mut world = World::new();
    build_scenario(&mut world, ScenarioParams::demo());
    world
}

/// A world where every unit is occupied, for the no-match path.
pub fn busy_world() -> World {
    let roster = vec![
        unit_with_status("AMB-01", 10.0, 10.0, UnitStatus::Busy),
        unit_with_status("AMB-02", 45.0, 55.0, UnitStatus::Dispatched),
    ];
    let mut world = World::new();
    build_scenario(&mut world, ScenarioParams::default().with_roster(roster));
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::PatientDirectory;
    use crate::fleet::Unit;

    #[test]
    fn test_world_matches_the_demo_scenario() {
        let mut world = create_test_world();
        let mut units = world.query::<&Unit>();
        assert_eq!(units.iter(&world).count(), 5);
        assert_eq!(world.resource::<PatientDirectory>().len(), 2);
    }

    #[test]
    fn busy_world_has_no_available_units() {
        let mut world = busy_world();
        let mut units = world.query::<&Unit>();
        assert!(units.iter(&world).all(|u| !u.0.is_available()));
    }
}
