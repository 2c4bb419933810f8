use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::clock::{CurrentEvent, EventKind};
use crate::fleet::{Unit, UnitStatus};
use crate::session::{EmergencyState, PortalSession};
use crate::telemetry::PortalTelemetry;

/// Cancels the emergency flow: a dispatched unit goes back to `Available`
/// and the ticket is cleared. Cancelling a still-searching or unserved
/// request just resets the flow (the stale resolve event, if any, is
/// dropped by its sequence check).
pub fn dispatch_cancel_system(
    event: Res<CurrentEvent>,
    mut session: ResMut<PortalSession>,
    mut telemetry: ResMut<PortalTelemetry>,
    mut units: Query<&mut Unit>,
) {
    if event.0.kind != EventKind::DispatchCancel {
        return;
    }

    if let EmergencyState::Dispatched(ticket) = &session.emergency {
        let unit_id = ticket.id.clone();
        for mut unit in units.iter_mut() {
            if unit.0.id == unit_id && unit.0.status == UnitStatus::Dispatched {
                unit.0.status = UnitStatus::Available;
                break;
            }
        }
        telemetry.dispatches_cancelled += 1;
    }

    session.emergency = EmergencyState::Idle;
}

#[cfg(test)]
mod tests {
    use bevy_ecs::prelude::World;

    use crate::actions::{cancel_dispatch, request_dispatch};
    use crate::fleet::{Unit, UnitStatus};
    use crate::runner::{portal_schedule, run_until_empty};
    use crate::session::{EmergencyState, PortalSession};
    use crate::telemetry::PortalTelemetry;
    use crate::test_helpers::create_test_world;

    fn run(world: &mut World) {
        let mut schedule = portal_schedule();
        run_until_empty(world, &mut schedule, 100);
    }

    fn unit_status(world: &mut World, id: &str) -> UnitStatus {
        let mut units = world.query::<&Unit>();
        units
            .iter(world)
            .find(|u| u.0.id == id)
            .map(|u| u.0.status)
            .expect("unit exists")
    }

    #[test]
    fn cancel_returns_the_dispatched_unit_to_available() {
        let mut world = create_test_world();
        request_dispatch(&mut world);
        run(&mut world);
        assert_eq!(unit_status(&mut world, "AMB-05"), UnitStatus::Dispatched);

        cancel_dispatch(&mut world);
        run(&mut world);

        assert_eq!(unit_status(&mut world, "AMB-05"), UnitStatus::Available);
        assert_eq!(
            world.resource::<PortalSession>().emergency,
            EmergencyState::Idle
        );
        assert_eq!(world.resource::<PortalTelemetry>().dispatches_cancelled, 1);
    }

    #[test]
    fn cancel_during_search_drops_the_pending_resolve() {
        let mut world = create_test_world();
        request_dispatch(&mut world);
        // Cancel lands before the resolve event fires; the resolve carries
        // a stale sequence number and must not dispatch anything.
        cancel_dispatch(&mut world);
        run(&mut world);

        assert_eq!(
            world.resource::<PortalSession>().emergency,
            EmergencyState::Idle
        );
        assert_eq!(unit_status(&mut world, "AMB-05"), UnitStatus::Available);
        let telemetry = world.resource::<PortalTelemetry>();
        assert_eq!(telemetry.dispatches_resolved(), 0);
        assert_eq!(telemetry.dispatches_cancelled, 0);
    }

    #[test]
    fn cancel_then_new_request_dispatches_the_same_unit_again() {
        let mut world = create_test_world();
        request_dispatch(&mut world);
        run(&mut world);
        cancel_dispatch(&mut world);
        run(&mut world);
        request_dispatch(&mut world);
        run(&mut world);

        let session = world.resource::<PortalSession>();
        assert_eq!(session.dispatched_unit().expect("dispatched").id, "AMB-05");
    }
}
