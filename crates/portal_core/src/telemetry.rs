//! Telemetry: counters and a log of resolved dispatches.

use bevy_ecs::prelude::Resource;

/// One resolved dispatch, recorded when the matcher selects a unit.
/// Timestamps are portal-clock milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecord {
    pub requested_at_ms: u64,
    pub resolved_at_ms: u64,
    pub unit_id: String,
    pub distance_km: f64,
    pub eta_minutes: u32,
}

impl DispatchRecord {
    /// Time from the emergency request to the matcher resolving it.
    pub fn time_to_dispatch_ms(&self) -> u64 {
        self.resolved_at_ms.saturating_sub(self.requested_at_ms)
    }
}

/// Collects portal telemetry. Insert as a resource to record session
/// outcomes.
#[derive(Debug, Default, Resource)]
pub struct PortalTelemetry {
    pub lookups_succeeded: u64,
    pub lookups_failed: u64,
    pub dispatches_unserved: u64,
    pub dispatches_cancelled: u64,
    pub dispatch_log: Vec<DispatchRecord>,
}

impl PortalTelemetry {
    pub fn record_dispatch(&mut self, record: DispatchRecord) {
        self.dispatch_log.push(record);
    }

    pub fn dispatches_resolved(&self) -> usize {
        self.dispatch_log.len()
    }
}
