use crate::error::StateError;
use crate::event::Observer;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Broadcasts change notifications to registered observers
pub struct EventBus {
    observers: Vec<(SubscriptionId, Box<dyn Observer>)>,
    next_id: usize,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer and hand it back to the caller.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<Box<dyn Observer>, StateError> {
        let index = self
            .observers
            .iter()
            .position(|(existing, _)| *existing == id)
            .ok_or(StateError::ObserverNotFound(id))?;
        Ok(self.observers.remove(index).1)
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.observers.iter().any(|(existing, _)| *existing == id)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Call `update` on every observer, synchronously.
    pub fn emit(&self) {
        for (_, observer) in &self.observers {
            observer.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counter(Rc<Cell<usize>>);

    impl Observer for Counter {
        fn update(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn ids_are_not_reused_after_unsubscribe() {
        let mut bus = EventBus::new();
        let hits = Rc::new(Cell::new(0));
        let first = bus.subscribe(Box::new(Counter(hits.clone())));
        bus.unsubscribe(first).unwrap();
        let second = bus.subscribe(Box::new(Counter(hits.clone())));
        assert_ne!(first, second);
        assert!(!bus.is_subscribed(first));
        assert!(bus.is_subscribed(second));
    }

    #[test]
    fn emit_reaches_every_observer() {
        let mut bus = EventBus::new();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        bus.subscribe(Box::new(Counter(a.clone())));
        bus.subscribe(Box::new(Counter(b.clone())));
        bus.emit();
        assert_eq!((a.get(), b.get()), (1, 1));
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut other = EventBus::new();
        let foreign = other.subscribe(Box::new(Counter(Rc::new(Cell::new(0)))));
        let mut bus = EventBus::new();
        let err = bus.unsubscribe(foreign).err();
        assert_eq!(err, Some(StateError::ObserverNotFound(foreign)));
    }
}
