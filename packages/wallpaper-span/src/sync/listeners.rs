//! Change listeners for a synced value.
//!
//! Listeners are plain callbacks invoked once per change, in registration
//! order. Registering returns a [`Subscription`] guard that removes the
//! listener when dropped.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Ordered set of change callbacks.
#[derive(Default, Clone)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Listeners>>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers `listener`, returning the guard that keeps it registered.
    pub fn add<F>(&self, listener: F) -> Subscription
    where F: Fn(&str) + Send + Sync + 'static {
        let mut listeners = self.inner.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));

        Subscription { id, registry: Arc::downgrade(&self.inner) }
    }

    /// Calls every registered listener with `value`.
    ///
    /// The registry lock is released before the callbacks run, so a listener
    /// may register or drop subscriptions.
    pub fn emit(&self, value: &str) {
        let snapshot: Vec<Listener> =
            self.inner.lock().entries.iter().map(|(_, listener)| Arc::clone(listener)).collect();

        for listener in snapshot {
            listener(value);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize { self.inner.lock().entries.len() }

    #[cfg(test)]
    fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Keeps the listener registered for the lifetime of the value.
    pub fn detach(mut self) { self.registry = Weak::new(); }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish_non_exhaustive()
    }
}
