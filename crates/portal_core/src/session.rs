//! Portal session: all caller-side state as one explicit resource.
//!
//! The current view, the active patient, the pending lookup, and the
//! emergency flow all live here instead of in ambient globals. Sequence
//! counters tie in-flight clock events to the request that scheduled them,
//! so a resolve that arrives after a cancel or a newer request is a no-op.

use bevy_ecs::prelude::Resource;

use crate::fleet::Ambulance;

/// Which portal screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Dashboard,
    Records,
    Emergency,
}

/// State of the ID lookup form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    /// Submitted, waiting for the simulated round-trip.
    Pending { input: String },
    /// Last lookup failed; `message` is shown on the form.
    Failed { message: String },
}

/// State of the emergency flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EmergencyState {
    #[default]
    Idle,
    /// Request in flight; the matcher runs when the resolve event fires.
    Searching { requested_at_ms: u64 },
    /// A unit was matched and marked `Dispatched`; the annotated copy
    /// (distance, ETA) is kept for display.
    Dispatched(Ambulance),
    /// No unit was available. Recoverable: the user may retry.
    Unserved,
}

#[derive(Debug, Default, Resource)]
pub struct PortalSession {
    pub view: ViewState,
    pub patient_id: Option<String>,
    pub lookup: LookupState,
    pub emergency: EmergencyState,
    /// Bumped on every submitted lookup; stale resolves are dropped.
    pub lookup_seq: u64,
    /// Bumped on every dispatch request and on cancel.
    pub dispatch_seq: u64,
}

impl PortalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_view(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Clears the patient and any lookup state; the emergency flow is
    /// untouched (a dispatched unit stays dispatched across logout).
    pub fn logout(&mut self) {
        self.patient_id = None;
        self.lookup = LookupState::Idle;
        self.view = ViewState::Dashboard;
    }

    pub fn active_patient(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    pub fn dispatched_unit(&self) -> Option<&Ambulance> {
        match &self.emergency {
            EmergencyState::Dispatched(unit) => Some(unit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_clears_patient_and_returns_to_dashboard() {
        let mut session = PortalSession::new();
        session.patient_id = Some("ABHA1234".to_string());
        session.lookup = LookupState::Failed {
            message: "whatever".to_string(),
        };
        session.open_view(ViewState::Records);

        session.logout();

        assert_eq!(session.active_patient(), None);
        assert_eq!(session.lookup, LookupState::Idle);
        assert_eq!(session.view, ViewState::Dashboard);
    }

    #[test]
    fn dispatched_unit_is_only_exposed_when_dispatched() {
        let mut session = PortalSession::new();
        assert!(session.dispatched_unit().is_none());

        session.emergency = EmergencyState::Searching { requested_at_ms: 0 };
        assert!(session.dispatched_unit().is_none());

        session.emergency = EmergencyState::Unserved;
        assert!(session.dispatched_unit().is_none());
    }
}
