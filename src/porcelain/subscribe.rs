use std::sync::Arc;

use crate::reactive::Reactive;

/// Type alias for subscribe listeners
pub type SubscribeListener<T> = Box<dyn Fn(&T) + Send + Sync + 'static>;

/// Trait for types that can be converted into subscribe listeners
pub trait IntoSubscribeListener<T> {
    fn into_subscribe_listener(self) -> SubscribeListener<T>;
}

// Implementations for converting closures to SubscribeListener<T>
impl<F, T> IntoSubscribeListener<T> for F
where F: Fn(&T) + Send + Sync + 'static
{
    fn into_subscribe_listener(self) -> SubscribeListener<T> { Box::new(self) }
}

// IntoSubscribeListener implementation for std::sync::mpsc channels
impl<T: Clone + Send + 'static> IntoSubscribeListener<T> for std::sync::mpsc::Sender<T> {
    fn into_subscribe_listener(self) -> SubscribeListener<T> {
        Box::new(move |value| {
            let _ = self.send(value.clone()); // Ignore send errors
        })
    }
}

// IntoSubscribeListener implementation for tokio channels
#[cfg(feature = "tokio")]
impl<T: Clone + Send + 'static> IntoSubscribeListener<T> for tokio::sync::mpsc::UnboundedSender<T> {
    fn into_subscribe_listener(self) -> SubscribeListener<T> {
        Box::new(move |value| {
            let _ = self.send(value.clone()); // Ignore send errors
        })
    }
}

/// Closure subscriptions that need no caller-owned listener object.
pub trait Subscribe<T: 'static> {
    /// Subscribe to future values. The subscription lives until the returned
    /// guard is dropped.
    fn subscribe<L>(&self, listener: L) -> SubscriptionGuard
    where L: IntoSubscribeListener<T>;

    /// Like [`subscribe`](Self::subscribe), but also delivers the current
    /// value synchronously before returning.
    fn subscribe_now<L>(&self, listener: L) -> SubscriptionGuard
    where L: IntoSubscribeListener<T>;
}

/// A guard for a subscription to an observable value.
///
/// The guard owns the anchor object registered as the listener; dropping the
/// guard drops the anchor, and the registry prunes the entry on its next
/// operation.
pub struct SubscriptionGuard {
    _anchor: Arc<()>,
}

impl<T: Clone + 'static> Subscribe<T> for Reactive<T> {
    fn subscribe<L>(&self, listener: L) -> SubscriptionGuard
    where L: IntoSubscribeListener<T> {
        let listener = listener.into_subscribe_listener();
        let anchor = Arc::new(());
        self.bind(&anchor, move |_, value| listener(value));
        SubscriptionGuard { _anchor: anchor }
    }

    fn subscribe_now<L>(&self, listener: L) -> SubscriptionGuard
    where L: IntoSubscribeListener<T> {
        let listener = listener.into_subscribe_listener();
        let anchor = Arc::new(());
        self.bind_now(&anchor, move |_, value| listener(value));
        SubscriptionGuard { _anchor: anchor }
    }
}
