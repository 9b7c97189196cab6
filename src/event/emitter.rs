//! Named-notification emitter.
//!
//! [`Emitter`] keeps an ordered list of listeners per event name. Listeners
//! run in subscription order and receive the payload by shared reference;
//! payloads that need to signal back (e.g. stopping propagation) carry their
//! own interior-mutable flag.

use std::collections::HashMap;
use std::fmt;

/// Handle returned by [`Emitter::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Ordered, name-keyed listener registry.
pub struct Emitter<E> {
    listeners: HashMap<String, Vec<(ListenerId, Listener<E>)>>,
    next_id: u64,
}

impl<E> Emitter<E> {
    /// Create an emitter with no subscriptions.
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    /// Subscribe `listener` to `name`. Returns a handle for [`off`](Self::off).
    pub fn on(&mut self, name: impl Into<String>, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(name.into())
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove one subscription. Returns `false` if it was not registered.
    pub fn off(&mut self, name: &str, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(name) else {
            return false;
        };
        let before = list.len();
        list.retain(|(lid, _)| *lid != id);
        before != list.len()
    }

    /// Invoke every listener registered for `name`, in subscription order.
    ///
    /// Returns the number of listeners invoked.
    pub fn emit(&mut self, name: &str, payload: &E) -> usize {
        match self.listeners.get_mut(name) {
            Some(list) => {
                for (_, listener) in list.iter_mut() {
                    listener(payload);
                }
                list.len()
            }
            None => 0,
        }
    }

    /// Number of listeners registered for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }

    /// Drop every subscription for every name.
    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Whether no listeners are registered at all.
    pub fn is_empty(&self) -> bool {
        self.listeners.values().all(Vec::is_empty)
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<_> = self
            .listeners
            .iter()
            .map(|(name, list)| (name.as_str(), list.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("Emitter").field("listeners", &counts).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
