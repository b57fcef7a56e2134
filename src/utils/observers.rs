//! Minimal observer list used by the view-model to publish changes.

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An ordered list of listeners for events of type `E`.
///
/// Listeners are called in subscription order.
pub struct Observers<E> {
    listeners: Vec<(SubscriptionId, Box<dyn Fn(&E)>)>,
    next_id: u64,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a listener and returns its handle.
    pub fn subscribe(&mut self, listener: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Calls every listener with the event.
    pub fn notify(&self, event: &E) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}
