//! Portal runner: advances the clock and routes events into the ECS.
//!
//! Clock progression and event routing happen here, outside systems. Each
//! step pops the next event from [PortalClock], inserts it as
//! [CurrentEvent], then runs the schedule. Systems are gated on the event
//! kind so only the relevant one does work per step.

use bevy_ecs::prelude::Res;
use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::{CurrentEvent, Event, EventKind, PortalClock};
use crate::systems::{
    dispatch_cancel::dispatch_cancel_system, dispatch_resolve::dispatch_resolve_system,
    patient_lookup::patient_lookup_system,
};

fn is_lookup_resolved(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::LookupResolved)
        .unwrap_or(false)
}

fn is_dispatch_resolve(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::DispatchResolve)
        .unwrap_or(false)
}

fn is_dispatch_cancel(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::DispatchCancel)
        .unwrap_or(false)
}

/// Runs one portal step: pops the next event, inserts it as
/// [CurrentEvent], then runs the schedule. Returns `true` if an event was
/// processed, `false` if the clock was empty.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    let event = match world.resource_mut::<PortalClock>().pop_next() {
        Some(e) => e,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));
    schedule.run(world);
    true
}

/// Runs one portal step and invokes `hook` after the schedule completes.
pub fn run_next_event_with_hook<F>(world: &mut World, schedule: &mut Schedule, mut hook: F) -> bool
where
    F: FnMut(&World, &Event),
{
    let event = match world.resource_mut::<PortalClock>().pop_next() {
        Some(e) => e,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));
    schedule.run(world);
    hook(world, &event);
    true
}

/// Runs portal steps until the event queue is empty or `max_steps` is
/// reached. Returns the number of steps executed.
pub fn run_until_empty(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule) {
        steps += 1;
    }
    steps
}

/// Builds the portal schedule: every event-reacting system, each gated on
/// its event kind.
pub fn portal_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((
        patient_lookup_system.run_if(is_lookup_resolved),
        dispatch_resolve_system.run_if(is_dispatch_resolve),
        dispatch_cancel_system.run_if(is_dispatch_cancel),
    ));
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{begin_lookup, request_dispatch};
    use crate::test_helpers::create_test_world;

    #[test]
    fn run_until_empty_counts_processed_events() {
        let mut world = create_test_world();
        begin_lookup(&mut world, "ABHA1234");
        request_dispatch(&mut world);

        let mut schedule = portal_schedule();
        let steps = run_until_empty(&mut world, &mut schedule, 100);
        assert_eq!(steps, 2);
        assert!(world.resource::<PortalClock>().is_empty());
    }

    #[test]
    fn empty_clock_processes_nothing() {
        let mut world = create_test_world();
        let mut schedule = portal_schedule();
        assert!(!run_next_event(&mut world, &mut schedule));
    }

    #[test]
    fn hook_sees_each_processed_event() {
        let mut world = create_test_world();
        begin_lookup(&mut world, "ABHA1234");

        let mut schedule = portal_schedule();
        let mut seen = Vec::new();
        while run_next_event_with_hook(&mut world, &mut schedule, |_, event| {
            seen.push(event.kind);
        }) {}

        assert_eq!(seen, vec![EventKind::LookupResolved]);
    }
}
