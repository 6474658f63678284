// Subscriber registry for stack changes
use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<D> = Box<dyn FnMut(&[D])>;

pub struct ObserverList<D> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Callback<D>)>,
}

impl<D> ObserverList<D> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&[D]) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Calls every subscriber in subscription order.
    pub fn notify(&mut self, path: &[D]) {
        for (_, callback) in self.observers.iter_mut() {
            callback(path);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<D> Default for ObserverList<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for ObserverList<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("subscribers", &self.observers.len())
            .finish()
    }
}
