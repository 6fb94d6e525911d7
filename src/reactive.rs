use std::sync::Arc;

use crate::broadcast::Broadcast;
use crate::value::ValueCell;

/// An observable value: holds the current `T` and notifies bound listeners
/// on every [`update`](Self::update).
///
/// Listeners are arbitrary caller-owned `Arc<U>` objects. Binding never
/// extends a listener's lifetime - the registry holds only weak handles, and
/// entries whose listener has been destroyed are pruned automatically on the
/// next bind/update/unbind. All mutation goes through `&self`; share a
/// `Reactive` by embedding it in a model struct or wrapping it in an `Arc`.
pub struct Reactive<T> {
    value: ValueCell<T>,
    broadcast: Broadcast<T>,
}

impl<T> Reactive<T> {
    /// Creates a new `Reactive` holding `value`, with no listeners.
    pub fn new(value: T) -> Self { Self { value: ValueCell::new(value), broadcast: Broadcast::new() } }

    /// Calls `f` with a borrow of the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R { self.value.with(f) }

    /// Replaces the value without notifying listeners. Silent state
    /// correction: the next [`get`](Self::get) sees the new value, but no
    /// handler runs.
    pub fn set(&self, value: T) { self.value.set(value); }

    /// Subscribes `listener` to receive every future value via `handler`.
    /// The current value is not delivered - see [`bind_now`](Self::bind_now).
    ///
    /// Binding the same listener again registers an independent entry (no
    /// deduplication); all entries for a listener are removed together by
    /// [`unbind`](Self::unbind). A `None` listener is silently ignored.
    pub fn bind<'a, U, F>(&self, listener: impl Into<Option<&'a Arc<U>>>, handler: F)
    where
        U: Send + Sync + 'static,
        F: Fn(&U, &T) + Send + Sync + 'static,
    {
        let Some(listener) = listener.into() else { return };
        self.broadcast.add_listener(listener, handler);
    }

    /// Unsubscribes `listener`: removes every entry registered for it, no
    /// matter how many times it was bound. No-op for `None` or a listener
    /// that was never bound.
    pub fn unbind<'a, U>(&self, listener: impl Into<Option<&'a Arc<U>>>)
    where U: Send + Sync + 'static {
        let Some(listener) = listener.into() else { return };
        self.broadcast.remove_listener(listener);
    }
}

impl<T: Clone> Reactive<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T { self.value.value() }

    /// Replaces the value, then notifies every live listener in bind order.
    ///
    /// The store happens before the broadcast and no lock is held while
    /// handlers run: a handler that calls [`get`](Self::get) observes the
    /// already-updated state, and a handler may call back into this
    /// `Reactive` without deadlocking. A panicking handler is not caught:
    /// the panic propagates to the caller of `update`, and later-bound
    /// listeners are not notified for that update.
    pub fn update(&self, value: T) {
        self.value.set(value.clone());
        self.broadcast.send(&value);
    }

    /// Like [`bind`](Self::bind), but also invokes `handler` exactly once
    /// with the current value, synchronously, before returning. This
    /// delivers the present state to a newly attached observer without
    /// waiting for the next update, whether or not the value has ever
    /// changed.
    pub fn bind_now<'a, U, F>(&self, listener: impl Into<Option<&'a Arc<U>>>, handler: F)
    where
        U: Send + Sync + 'static,
        F: Fn(&U, &T) + Send + Sync + 'static,
    {
        let Some(listener) = listener.into() else { return };
        let handler = Arc::new(handler);
        let registered = handler.clone();
        self.broadcast.add_listener(listener, move |listener, value| (*registered)(listener, value));
        let current = self.value.value();
        (*handler)(listener, &current);
    }
}

impl<T: Default> Default for Reactive<T> {
    fn default() -> Self { Self::new(T::default()) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Reactive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|v| f.debug_struct("Reactive").field("value", v).field("broadcast", &self.broadcast).finish())
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Reactive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.with(|v| write!(f, "{}", v)) }
}
