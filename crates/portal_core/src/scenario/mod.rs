pub mod build;
pub mod demo;
pub mod params;

pub use build::{build_scenario, generated_roster};
pub use params::{
    create_nearest_dispatch, DispatchLatencyMs, LookupLatencyMs, RequesterLocation,
    ScenarioParams, DEFAULT_DISPATCH_LATENCY_MS, DEFAULT_LOOKUP_LATENCY_MS,
};
