//! Observer registry.
//!
//! The match buffers the events of a transaction and hands them to the bus
//! only after every mutation has been applied. Observers are called
//! synchronously, in subscription order, once per event.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::event::MatchEvent;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Receives committed match events.
///
/// Any `FnMut(&MatchEvent)` closure is an observer.
pub trait MatchObserver: Send {
    fn on_event(&mut self, event: &MatchEvent);
}

impl<F> MatchObserver for F
where
    F: FnMut(&MatchEvent) + Send,
{
    fn on_event(&mut self, event: &MatchEvent) {
        self(event)
    }
}

/// Ordered list of observers.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<(ObserverId, Box<dyn MatchObserver>)>,
    next_id: u32,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer. It receives every event published from now on.
    pub fn subscribe(&mut self, observer: impl MatchObserver + 'static) -> ObserverId {
        let id = ObserverId::new(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver events in order. Each event reaches every observer before the next one is sent.
    pub fn publish(&mut self, events: &[MatchEvent]) {
        for event in events {
            trace!(event = event.name(), observers = self.observers.len(), "dispatch");
            for (_, observer) in &mut self.observers {
                observer.on_event(event);
            }
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_publish_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        let sink = Arc::clone(&seen);
        bus.subscribe(move |e: &MatchEvent| sink.lock().unwrap().push(e.name()));

        bus.publish(&[MatchEvent::MatchStarted, MatchEvent::MatchReset]);
        assert_eq!(*seen.lock().unwrap(), vec!["match_started", "match_reset"]);
    }

    #[test]
    fn test_every_observer_sees_each_event() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        for tag in ["a", "b"] {
            let sink = Arc::clone(&seen);
            bus.subscribe(move |e: &MatchEvent| sink.lock().unwrap().push(format!("{tag}:{}", e.name())));
        }

        bus.publish(&[MatchEvent::MatchStarted, MatchEvent::MatchTerminated]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "a:match_started",
                "b:match_started",
                "a:match_terminated",
                "b:match_terminated",
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut bus = EventBus::new();

        let sink = Arc::clone(&count);
        let id = bus.subscribe(move |_: &MatchEvent| *sink.lock().unwrap() += 1);
        bus.publish(&[MatchEvent::MatchStarted]);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&[MatchEvent::MatchStarted]);

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(bus.is_empty());
    }

    struct Counter(Arc<Mutex<usize>>);

    impl MatchObserver for Counter {
        fn on_event(&mut self, _event: &MatchEvent) {
            *self.0.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_struct_observer() {
        let count = Arc::new(Mutex::new(0));
        let mut bus = EventBus::new();
        bus.subscribe(Counter(Arc::clone(&count)));
        assert_eq!(bus.len(), 1);

        bus.publish(&[MatchEvent::MatchReset]);
        assert_eq!(*count.lock().unwrap(), 1);

        bus.publish(&[MatchEvent::MatchStarted, MatchEvent::MatchTerminated]);
        assert_eq!(*count.lock().unwrap(), 3);
    }
}
