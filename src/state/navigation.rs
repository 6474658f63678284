// Navigation state - the destination stack and its mutation vocabulary
use crate::destination::Destination;
use crate::message::NavRequest;
use crate::state::observers::{ObserverList, SubscriptionId};

/// Owns the ordered stack of destinations.
///
/// Index 0 is the root-most pushed destination, the last entry is the one
/// currently visible. An empty stack means only the root content is shown.
/// Every operation is total: out-of-range input resolves to a no-op or a
/// full clear. Whenever the stack changes, subscribers are notified with
/// the new stack before the call returns.
///
/// Notification is change-only: a no-op call such as `navigate_to_root` on an
/// empty stack, or `replace` with an identical stack, does not fire even
/// though it counts as a mutation call.
#[derive(Debug)]
pub struct NavigationManager<D: Destination> {
    path: Vec<D>,
    observers: ObserverList<D>,
}

impl<D: Destination> NavigationManager<D> {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            observers: ObserverList::new(),
        }
    }

    pub fn path(&self) -> &[D] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The destination currently on screen, `None` when at the root.
    pub fn top(&self) -> Option<&D> {
        self.path.last()
    }

    pub fn contains(&self, destination: &D) -> bool {
        self.path.contains(destination)
    }

    /// Pops the last `count` destinations.
    ///
    /// Non-positive counts do nothing; counts at or beyond the depth clear
    /// the stack.
    pub fn navigate_back(&mut self, count: isize) {
        let Ok(count) = usize::try_from(count) else {
            return;
        };
        if count == 0 || self.path.is_empty() {
            return;
        }

        let keep = self.path.len().saturating_sub(count);
        self.path.truncate(keep);
        self.commit("navigate_back");
    }

    /// Truncates the stack so it ends at the most recent occurrence of
    /// `destination`. Does nothing if it is not on the stack.
    pub fn navigate_back_to(&mut self, destination: &D) {
        let Some(index) = self.path.iter().rposition(|entry| entry == destination) else {
            tracing::debug!(?destination, "navigate_back_to: destination not on stack");
            return;
        };

        let keep = index + 1;
        if keep < self.path.len() {
            self.path.truncate(keep);
            self.commit("navigate_back_to");
        }
    }

    pub fn navigate_to_root(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.path.clear();
        self.commit("navigate_to_root");
    }

    pub fn navigate_to(&mut self, destination: D) {
        self.path.push(destination);
        self.commit("navigate_to");
    }

    /// Pushes all `destinations`, keeping their order.
    pub fn navigate_to_all<I>(&mut self, destinations: I)
    where
        I: IntoIterator<Item = D>,
    {
        let before = self.path.len();
        self.path.extend(destinations);
        if self.path.len() != before {
            self.commit("navigate_to_all");
        }
    }

    /// Discards the current stack and installs `destinations`.
    /// An empty input is the same as `navigate_to_root`.
    pub fn replace<I>(&mut self, destinations: I)
    where
        I: IntoIterator<Item = D>,
    {
        self.install(destinations.into_iter().collect(), "replace");
    }

    /// Accepts a stack written back by the rendering layer, e.g. after a
    /// back gesture or a breadcrumb jump. Any length is accepted.
    pub fn set_path(&mut self, path: Vec<D>) {
        self.install(path, "set_path");
    }

    /// Dispatches a request to the matching operation.
    pub fn apply(&mut self, request: NavRequest<D>) {
        tracing::trace!(request = request.name(), "applying navigation request");
        match request {
            NavRequest::NavigateBack(count) => self.navigate_back(count),
            NavRequest::NavigateBackTo(destination) => self.navigate_back_to(&destination),
            NavRequest::NavigateToRoot => self.navigate_to_root(),
            NavRequest::Navigate(destination) => self.navigate_to(destination),
            NavRequest::NavigateAll(destinations) => self.navigate_to_all(destinations),
            NavRequest::Replace(destinations) => self.replace(destinations),
        }
    }

    /// Registers a callback invoked with the new stack after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&[D]) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn install(&mut self, path: Vec<D>, operation: &'static str) {
        if self.path == path {
            return;
        }
        self.path = path;
        self.commit(operation);
    }

    fn commit(&mut self, operation: &'static str) {
        tracing::debug!(
            operation,
            depth = self.path.len(),
            top = ?self.path.last(),
            "navigation stack changed"
        );
        if self.observers.is_empty() {
            return;
        }
        self.observers.notify(&self.path);
    }
}

impl<D: Destination> Default for NavigationManager<D> {
    fn default() -> Self {
        Self::new()
    }
}
