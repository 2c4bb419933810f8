use bevy_ecs::prelude::Resource;

use crate::dispatch::{DispatchAlgorithmResource, NearestAvailable};
use crate::fleet::Ambulance;
use crate::grid::Coordinate;
use crate::records::Patient;

/// Default lookup round-trip shown to the user: 800 ms.
pub const DEFAULT_LOOKUP_LATENCY_MS: u64 = 800;

/// Default dispatch search animation: 2 seconds.
pub const DEFAULT_DISPATCH_LATENCY_MS: u64 = 2000;

/// Where the requester sits on the grid. The demo keeps the user fixed at
/// the center; real geolocation is out of scope.
#[derive(Debug, Clone, Copy, Resource)]
pub struct RequesterLocation(pub Coordinate);

impl Default for RequesterLocation {
    fn default() -> Self {
        Self(Coordinate::new(50.0, 50.0))
    }
}

/// Simulated latency before a submitted lookup resolves.
#[derive(Debug, Clone, Copy, Resource)]
pub struct LookupLatencyMs(pub u64);

impl Default for LookupLatencyMs {
    fn default() -> Self {
        Self(DEFAULT_LOOKUP_LATENCY_MS)
    }
}

/// Simulated latency before an emergency request runs the matcher.
#[derive(Debug, Clone, Copy, Resource)]
pub struct DispatchLatencyMs(pub u64);

impl Default for DispatchLatencyMs {
    fn default() -> Self {
        Self(DEFAULT_DISPATCH_LATENCY_MS)
    }
}

/// Everything needed to assemble a portal world.
///
/// `roster` and `patients` seed the fleet and the directory;
/// `generated_units` adds that many randomly placed available units on top
/// (seeded, for reproducibility).
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub grid_size: f64,
    pub requester_location: Coordinate,
    pub lookup_latency_ms: u64,
    pub dispatch_latency_ms: u64,
    pub roster: Vec<Ambulance>,
    pub patients: Vec<Patient>,
    pub generated_units: usize,
    pub seed: u64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            grid_size: 100.0,
            requester_location: RequesterLocation::default().0,
            lookup_latency_ms: DEFAULT_LOOKUP_LATENCY_MS,
            dispatch_latency_ms: DEFAULT_DISPATCH_LATENCY_MS,
            roster: Vec::new(),
            patients: Vec::new(),
            generated_units: 0,
            seed: 0,
        }
    }
}

impl ScenarioParams {
    /// The canonical demo: five-unit roster, two patients, requester at
    /// the grid center.
    pub fn demo() -> Self {
        Self {
            roster: super::demo::demo_roster(),
            patients: super::demo::demo_patients(),
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_generated_units(mut self, count: usize) -> Self {
        self.generated_units = count;
        self
    }

    pub fn with_requester_location(mut self, location: Coordinate) -> Self {
        self.requester_location = location;
        self
    }

    pub fn with_latencies_ms(mut self, lookup_ms: u64, dispatch_ms: u64) -> Self {
        self.lookup_latency_ms = lookup_ms;
        self.dispatch_latency_ms = dispatch_ms;
        self
    }

    pub fn with_roster(mut self, roster: Vec<Ambulance>) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }
}

/// Nearest-available matching as a ready-to-insert resource.
pub fn create_nearest_dispatch() -> DispatchAlgorithmResource {
    DispatchAlgorithmResource::new(Box::new(NearestAvailable))
}
