use bevy_ecs::prelude::World;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::PortalClock;
use crate::directory::PatientDirectory;
use crate::fleet::{Ambulance, Capability, Unit, UnitStatus};
use crate::grid::Coordinate;
use crate::scenario::params::{
    create_nearest_dispatch, DispatchLatencyMs, LookupLatencyMs, RequesterLocation,
    ScenarioParams,
};
use crate::session::PortalSession;
use crate::telemetry::PortalTelemetry;

/// Assembles a portal world: inserts the clock, session, telemetry,
/// directory, matching algorithm, and config resources, then spawns one
/// entity per roster unit (plus any generated units).
pub fn build_scenario(world: &mut World, params: ScenarioParams) {
    world.insert_resource(PortalClock::default());
    world.insert_resource(PortalSession::default());
    world.insert_resource(PortalTelemetry::default());
    world.insert_resource(RequesterLocation(params.requester_location));
    world.insert_resource(LookupLatencyMs(params.lookup_latency_ms));
    world.insert_resource(DispatchLatencyMs(params.dispatch_latency_ms));
    world.insert_resource(create_nearest_dispatch());
    world.insert_resource(PatientDirectory::from_patients(params.patients));

    for unit in params.roster {
        world.spawn(Unit(unit));
    }

    if params.generated_units > 0 {
        for unit in generated_roster(params.generated_units, params.seed, params.grid_size) {
            world.spawn(Unit(unit));
        }
    }
}

/// Generates `count` available units at seeded-random grid positions.
/// Capability alternates randomly; IDs are `GEN-001`, `GEN-002`, …
/// A non-positive grid size has no interior to place units in and yields
/// an empty roster.
pub fn generated_roster(count: usize, seed: u64, grid_size: f64) -> Vec<Ambulance> {
    if grid_size <= 0.0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|i| {
            let capability = if rng.gen_bool(0.5) {
                Capability::Advanced
            } else {
                Capability::Basic
            };
            Ambulance {
                id: format!("GEN-{i:03}"),
                operator: format!("Crew {i}"),
                plate: format!("RJ-14-GZ-{:04}", 1000 + i),
                location: Coordinate::new(
                    rng.gen_range(0.0..grid_size),
                    rng.gen_range(0.0..grid_size),
                ),
                status: UnitStatus::Available,
                capability,
                distance_km: None,
                eta_minutes: None,
            }
        })
        .collect()
}
