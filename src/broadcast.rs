use std::any::Any;
use std::sync::{Arc, RwLock, Weak};

use tracing::trace;

/// One registered listener: a type-erased weak handle used for liveness and
/// identity checks, plus the notification closure bound to that listener.
///
/// The closure captures its own typed `Weak<U>` and upgrades it on every
/// call, so invoking it after the listener has been destroyed is a safe
/// no-op rather than an error.
struct ProxyListener<T> {
    listener: Weak<dyn Any + Send + Sync>,
    notify: Arc<dyn Fn(&T) + Send + Sync>,
}

impl<T> Clone for ProxyListener<T> {
    fn clone(&self) -> Self { Self { listener: self.listener.clone(), notify: self.notify.clone() } }
}

impl<T> ProxyListener<T> {
    fn new<U>(listener: &Arc<U>, handler: impl Fn(&U, &T) + Send + Sync + 'static) -> Self
    where U: Send + Sync + 'static {
        let weak = Arc::downgrade(listener);
        let notify = Arc::new(move |value: &T| {
            // The listener may die between registration and this call
            if let Some(listener) = weak.upgrade() {
                handler(&listener, value);
            }
        });
        let erased: Arc<dyn Any + Send + Sync> = listener.clone();
        Self { listener: Arc::downgrade(&erased), notify }
    }

    fn is_alive(&self) -> bool { self.listener.strong_count() > 0 }

    /// Same listener allocation, compared by address. Vtable metadata is ignored.
    fn is_for<U>(&self, listener: &Arc<U>) -> bool { std::ptr::addr_eq(self.listener.as_ptr(), Arc::as_ptr(listener)) }
}

/// Ordered registry of weakly-held listeners. Notification order is
/// registration order. Registering a listener never extends its lifetime;
/// entries whose listener has been destroyed are pruned at the start of every
/// add/remove/send.
pub struct Broadcast<T> {
    listeners: RwLock<Vec<ProxyListener<T>>>,
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self { Self::new() }
}

impl<T> std::fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcast").field("listeners", &self.listeners.read().expect("listeners lock is poisoned").len()).finish()
    }
}

impl<T> Broadcast<T> {
    /// Creates an empty registry.
    pub fn new() -> Self { Self { listeners: RwLock::new(Vec::new()) } }

    /// Registers `handler` to be invoked with `listener` on every future
    /// send, for as long as `listener` is alive.
    ///
    /// Registrations are not deduplicated: adding the same listener again
    /// appends an independent entry, notified separately and removable only
    /// as a group via [`remove_listener`](Self::remove_listener).
    pub fn add_listener<U>(&self, listener: &Arc<U>, handler: impl Fn(&U, &T) + Send + Sync + 'static)
    where U: Send + Sync + 'static {
        let mut listeners = self.listeners.write().expect("listeners lock is poisoned");
        Self::prune(&mut listeners);
        listeners.push(ProxyListener::new(listener, handler));
    }

    /// Removes every entry registered for `listener` (same allocation, by
    /// reference identity rather than value equality), along with any entries
    /// whose listener has died. No-op for a listener that was never added.
    pub fn remove_listener<U>(&self, listener: &Arc<U>) {
        let mut listeners = self.listeners.write().expect("listeners lock is poisoned");
        listeners.retain(|proxy| proxy.is_alive() && !proxy.is_for(listener));
    }

    /// Notifies every live listener, in registration order.
    ///
    /// The entry list is snapshotted under the lock and invoked without it,
    /// so a handler that calls back into add/remove/send cannot corrupt the
    /// iteration. Entries added during a send are not notified until the
    /// next one.
    pub fn send(&self, value: &T) {
        let snapshot = {
            let mut listeners = self.listeners.write().expect("listeners lock is poisoned");
            Self::prune(&mut listeners);
            listeners.clone()
        };
        for proxy in &snapshot {
            (proxy.notify)(value);
        }
    }

    /// Stable filter: drops dead entries, preserving the order of live ones.
    fn prune(listeners: &mut Vec<ProxyListener<T>>) {
        let before = listeners.len();
        listeners.retain(ProxyListener::is_alive);
        let pruned = before - listeners.len();
        if pruned > 0 {
            trace!("pruned {} dead listeners", pruned);
        }
    }
}
