//! Portal clock: simulated latencies as explicitly scheduled events.
//!
//! The original portal experience shows artificial delays (a lookup
//! "network" round-trip, a dispatch search animation). Those delays are a
//! presentation concern, so they live here as scheduled events on a
//! virtual clock rather than inside any computation: an action schedules
//! the resolve event at `now + latency`, and the runner pops events in
//! timestamp order. No wall-clock time is involved.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    /// Pending patient ID lookup completes.
    LookupResolved,
    /// Pending emergency request runs the matcher.
    DispatchResolve,
    /// Active dispatch (or pending search) is cancelled.
    DispatchCancel,
}

/// What an event refers to. Requests carry a sequence number so a resolve
/// that was superseded by a cancel or a newer request can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventSubject {
    Request(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp_ms: u64,
    pub kind: EventKind,
    pub subject: Option<EventSubject>,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by timestamp.
        other
            .timestamp_ms
            .cmp(&self.timestamp_ms)
            .then_with(|| other.kind.cmp(&self.kind))
            .then_with(|| other.subject.cmp(&self.subject))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The event currently being processed; inserted by the runner before each
/// schedule run so systems can gate on it.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

#[derive(Debug, Default, Resource)]
pub struct PortalClock {
    now_ms: u64,
    events: BinaryHeap<Event>,
}

impl PortalClock {
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn next_event_time(&self) -> Option<u64> {
        self.events.peek().map(|e| e.timestamp_ms)
    }

    pub fn schedule_at(&mut self, timestamp_ms: u64, kind: EventKind, subject: Option<EventSubject>) {
        debug_assert!(
            timestamp_ms >= self.now_ms,
            "event timestamp must be >= current time"
        );
        self.events.push(Event {
            timestamp_ms,
            kind,
            subject,
        });
    }

    pub fn schedule_in_ms(&mut self, delay_ms: u64, kind: EventKind, subject: Option<EventSubject>) {
        self.schedule_at(self.now_ms + delay_ms, kind, subject);
    }

    /// Pops the next event and advances `now` to its timestamp.
    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now_ms = event.timestamp_ms;
        Some(event)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pops_events_in_time_order() {
        let mut clock = PortalClock::default();
        clock.schedule_at(2000, EventKind::DispatchResolve, Some(EventSubject::Request(1)));
        clock.schedule_at(800, EventKind::LookupResolved, Some(EventSubject::Request(1)));
        clock.schedule_at(2500, EventKind::DispatchCancel, None);

        let first = clock.pop_next().expect("first event");
        assert_eq!(first.timestamp_ms, 800);
        assert_eq!(first.kind, EventKind::LookupResolved);
        assert_eq!(clock.now_ms(), 800);

        let second = clock.pop_next().expect("second event");
        assert_eq!(second.timestamp_ms, 2000);

        let third = clock.pop_next().expect("third event");
        assert_eq!(third.timestamp_ms, 2500);
        assert_eq!(clock.now_ms(), 2500);

        assert!(clock.pop_next().is_none());
        assert!(clock.is_empty());
    }

    #[test]
    fn schedule_in_ms_is_relative_to_now() {
        let mut clock = PortalClock::default();
        clock.schedule_at(100, EventKind::LookupResolved, None);
        clock.pop_next();

        clock.schedule_in_ms(800, EventKind::LookupResolved, None);
        assert_eq!(clock.next_event_time(), Some(900));
    }
}
