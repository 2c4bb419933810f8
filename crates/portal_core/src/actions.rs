//! Session actions: world-level entry points that mutate the session and
//! schedule the corresponding clock events.
//!
//! Each action returns immediately; the visible outcome lands when the
//! scheduled event is processed by the runner. Latencies come from the
//! scenario's config resources.

use bevy_ecs::prelude::World;

use crate::clock::{EventKind, EventSubject, PortalClock};
use crate::scenario::{DispatchLatencyMs, LookupLatencyMs};
use crate::session::{EmergencyState, LookupState, PortalSession};

/// Submits a health ID for lookup. Any previously pending lookup is
/// superseded: its resolve event will carry a stale sequence number.
pub fn begin_lookup(world: &mut World, input: &str) {
    let seq = {
        let mut session = world.resource_mut::<PortalSession>();
        session.lookup_seq += 1;
        session.lookup = LookupState::Pending {
            input: input.to_string(),
        };
        session.lookup_seq
    };
    let latency = world.resource::<LookupLatencyMs>().0;
    world.resource_mut::<PortalClock>().schedule_in_ms(
        latency,
        EventKind::LookupResolved,
        Some(EventSubject::Request(seq)),
    );
}

/// Requests the nearest available unit. The matcher runs when the resolve
/// event fires; until then the session reports `Searching`.
pub fn request_dispatch(world: &mut World) {
    let now_ms = world.resource::<PortalClock>().now_ms();
    let seq = {
        let mut session = world.resource_mut::<PortalSession>();
        session.dispatch_seq += 1;
        session.emergency = EmergencyState::Searching {
            requested_at_ms: now_ms,
        };
        session.dispatch_seq
    };
    let latency = world.resource::<DispatchLatencyMs>().0;
    world.resource_mut::<PortalClock>().schedule_in_ms(
        latency,
        EventKind::DispatchResolve,
        Some(EventSubject::Request(seq)),
    );
}

/// Cancels the emergency flow. Bumping the sequence first guarantees an
/// in-flight resolve event cannot land after the cancel.
pub fn cancel_dispatch(world: &mut World) {
    world.resource_mut::<PortalSession>().dispatch_seq += 1;
    world
        .resource_mut::<PortalClock>()
        .schedule_in_ms(0, EventKind::DispatchCancel, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::EventKind;
    use crate::test_helpers::create_test_world;

    #[test]
    fn begin_lookup_sets_pending_and_schedules_resolve() {
        let mut world = create_test_world();
        begin_lookup(&mut world, "abha1234");

        let session = world.resource::<PortalSession>();
        assert_eq!(
            session.lookup,
            LookupState::Pending {
                input: "abha1234".to_string()
            }
        );
        assert_eq!(session.lookup_seq, 1);

        let mut clock = world.resource_mut::<PortalClock>();
        assert_eq!(clock.next_event_time(), Some(800));
        let event = clock.pop_next().expect("event");
        assert_eq!(event.kind, EventKind::LookupResolved);
    }

    #[test]
    fn request_dispatch_enters_searching_with_request_time() {
        let mut world = create_test_world();
        request_dispatch(&mut world);

        let session = world.resource::<PortalSession>();
        assert_eq!(
            session.emergency,
            EmergencyState::Searching { requested_at_ms: 0 }
        );
        assert_eq!(world.resource::<PortalClock>().next_event_time(), Some(2000));
    }

    #[test]
    fn cancel_invalidates_the_pending_request_sequence() {
        let mut world = create_test_world();
        request_dispatch(&mut world);
        let seq_before = world.resource::<PortalSession>().dispatch_seq;
        cancel_dispatch(&mut world);
        assert_eq!(world.resource::<PortalSession>().dispatch_seq, seq_before + 1);
    }
}
