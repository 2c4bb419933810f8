use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, EventSubject};
use crate::directory::PatientDirectory;
use crate::session::{LookupState, PortalSession, ViewState};
use crate::telemetry::PortalTelemetry;

/// Resolves a pending health ID lookup against the directory.
///
/// A hit selects the patient and routes the session to the dashboard; a
/// miss leaves the form with an error message. Resolves carrying a stale
/// sequence number (superseded by a newer submission) are dropped.
pub fn patient_lookup_system(
    event: Res<CurrentEvent>,
    directory: Res<PatientDirectory>,
    mut session: ResMut<PortalSession>,
    mut telemetry: ResMut<PortalTelemetry>,
) {
    if event.0.kind != EventKind::LookupResolved {
        return;
    }
    let Some(EventSubject::Request(seq)) = event.0.subject else {
        return;
    };
    if seq != session.lookup_seq {
        return;
    }
    let LookupState::Pending { input } = session.lookup.clone() else {
        return;
    };

    match directory.lookup(&input) {
        Ok(patient) => {
            session.patient_id = Some(patient.health_id.clone());
            session.lookup = LookupState::Idle;
            session.view = ViewState::Dashboard;
            telemetry.lookups_succeeded += 1;
        }
        Err(err) => {
            session.patient_id = None;
            session.lookup = LookupState::Failed {
                message: err.to_string(),
            };
            telemetry.lookups_failed += 1;
        }
    }
}
