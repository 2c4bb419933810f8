use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, EventSubject, PortalClock};
use crate::dispatch::DispatchAlgorithmResource;
use crate::fleet::{Ambulance, Unit, UnitStatus};
use crate::scenario::RequesterLocation;
use crate::session::{EmergencyState, PortalSession};
use crate::telemetry::{DispatchRecord, PortalTelemetry};

/// Runs the matcher for a pending emergency request.
///
/// The live roster is collected from the unit entities and handed to the
/// dispatch algorithm as plain records; on a match the selected entity is
/// marked `Dispatched` and the annotated copy is stored on the session.
/// Resolves whose sequence number was invalidated by a cancel or a newer
/// request are dropped.
pub fn dispatch_resolve_system(
    event: Res<CurrentEvent>,
    clock: Res<PortalClock>,
    requester: Res<RequesterLocation>,
    algorithm: Res<DispatchAlgorithmResource>,
    mut session: ResMut<PortalSession>,
    mut telemetry: ResMut<PortalTelemetry>,
    mut units: Query<&mut Unit>,
) {
    if event.0.kind != EventKind::DispatchResolve {
        return;
    }
    let Some(EventSubject::Request(seq)) = event.0.subject else {
        return;
    };
    if seq != session.dispatch_seq {
        return;
    }
    let EmergencyState::Searching { requested_at_ms } = &session.emergency else {
        return;
    };
    let requested_at_ms = *requested_at_ms;

    let roster: Vec<Ambulance> = units.iter().map(|unit| unit.0.clone()).collect();

    match algorithm.find_nearest(requester.0, &roster) {
        Some(matched) => {
            for mut unit in units.iter_mut() {
                if unit.0.id == matched.id {
                    unit.0.status = UnitStatus::Dispatched;
                    break;
                }
            }
            telemetry.record_dispatch(DispatchRecord {
                requested_at_ms,
                resolved_at_ms: clock.now_ms(),
                unit_id: matched.id.clone(),
                // Annotations are always set on a successful match.
                distance_km: matched.distance_km.unwrap_or_default(),
                eta_minutes: matched.eta_minutes.unwrap_or_default(),
            });
            session.emergency = EmergencyState::Dispatched(matched);
        }
        None => {
            session.emergency = EmergencyState::Unserved;
            telemetry.dispatches_unserved += 1;
        }
    }
}
