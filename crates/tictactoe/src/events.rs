//! Change notifications from a session to its presentation.
//!
//! The session never calls into rendering code directly. Anything that
//! needs to react to state changes subscribes a [`SessionObserver`] and
//! receives a [`SessionEvent`] after each successful operation.

use crate::{MoveResult, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A state change that has already happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Players were registered and a fresh game began.
    Started {
        /// Both players, in the order given to `start`.
        players: (Player, Player),
    },
    /// A symbol was placed.
    MoveApplied(MoveResult),
    /// The game reached an outcome. Follows the `MoveApplied` that caused it.
    Finished(Outcome),
    /// Board cleared, players kept.
    Reset,
}

/// Receives session events.
pub trait SessionObserver {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionEvent),
{
    fn on_event(&mut self, event: &SessionEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered list of subscribed observers.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn SessionObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn SessionObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        debug!(?id, count = self.entries.len(), "Observer subscribed");
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        let removed = self.entries.len() != before;
        debug!(?id, removed, "Observer unsubscribed");
        removed
    }

    pub(crate) fn notify(&mut self, event: &SessionEvent) {
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        let first = Rc::clone(&seen);
        observers.subscribe(Box::new(move |_: &SessionEvent| first.borrow_mut().push(1)));
        let second = Rc::clone(&seen);
        observers.subscribe(Box::new(move |_: &SessionEvent| second.borrow_mut().push(2)));

        observers.notify(&SessionEvent::Reset);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::default();

        let counter = Rc::clone(&count);
        let id = observers.subscribe(Box::new(move |_: &SessionEvent| {
            *counter.borrow_mut() += 1
        }));
        observers.notify(&SessionEvent::Reset);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&SessionEvent::Reset);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(observers.len(), 0);
    }
}
