use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Something that can resolve an open confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trigger {
    /// The confirm button.
    Accept,
    /// The cancel button.
    Reject,
    /// A click on the backdrop, outside the prompt surface.
    Backdrop,
    /// The cancellation key (Escape).
    Escape,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [
        Trigger::Accept,
        Trigger::Reject,
        Trigger::Backdrop,
        Trigger::Escape,
    ];
}

#[derive(Default)]
struct Table {
    next_id: u64,
    active: BTreeMap<u64, Trigger>,
}

/// Registry of live listener subscriptions.
///
/// Subscribing hands out a [`Subscription`] guard; the registration lives exactly
/// as long as the guard. The router consults the registry before delivering an
/// event, so an event with no live listener is simply not delivered.
#[derive(Clone, Default)]
pub struct Listeners {
    table: Rc<RefCell<Table>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, trigger: Trigger) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.active.insert(id, trigger);
        Subscription {
            id,
            trigger,
            table: Rc::downgrade(&self.table),
        }
    }

    pub fn is_listening(&self, trigger: Trigger) -> bool {
        self.table.borrow().active.values().any(|t| *t == trigger)
    }

    #[cfg(test)]
    pub(crate) fn active_count(&self) -> usize {
        self.table.borrow().active.len()
    }
}

/// A live registration. Dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription {
    id: u64,
    trigger: Trigger,
    table: Weak<RefCell<Table>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().active.remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("trigger", &self.trigger)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_lives_as_long_as_its_guard() {
        let listeners = Listeners::new();
        let sub = listeners.subscribe(Trigger::Escape);
        assert!(listeners.is_listening(Trigger::Escape));
        assert!(!listeners.is_listening(Trigger::Accept));

        drop(sub);
        assert!(!listeners.is_listening(Trigger::Escape));
        assert_eq!(listeners.active_count(), 0);
    }

    #[test]
    fn two_subscriptions_to_the_same_trigger_are_independent() {
        let listeners = Listeners::new();
        let first = listeners.subscribe(Trigger::Backdrop);
        let second = listeners.subscribe(Trigger::Backdrop);
        assert_eq!(listeners.active_count(), 2);

        drop(first);
        assert!(listeners.is_listening(Trigger::Backdrop));
        drop(second);
        assert!(!listeners.is_listening(Trigger::Backdrop));
    }

    #[test]
    fn guard_outliving_registry_is_harmless() {
        let listeners = Listeners::new();
        let sub = listeners.subscribe(Trigger::Reject);
        drop(listeners);
        assert!(format!("{:?}", sub).contains("Reject"));
        drop(sub);
    }
}
