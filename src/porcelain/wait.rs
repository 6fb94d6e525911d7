#[cfg(feature = "tokio")]
use crate::porcelain::subscribe::Subscribe;
#[cfg(feature = "tokio")]
use crate::reactive::Reactive;

/// Trait for waiting on observable values asynchronously
pub trait Wait<T: 'static> {
    /// Wait for the value to equal `target_value`
    fn wait_value(&self, target_value: T) -> impl std::future::Future<Output = ()> + Send
    where T: PartialEq + Clone + Send + Sync;

    /// Wait for the value to match the given predicate
    fn wait_for<F, R>(&self, predicate: F) -> impl std::future::Future<Output = R::Output> + Send
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: WaitResult,
        T: Send + Sync;
}

/// Helper trait for `wait_for` to allow flexible predicate return types.
///
/// ## Semantics
/// - `result()` returns `Some(output)` to stop waiting and return `output`
/// - `result()` returns `None` to continue waiting for the next update
pub trait WaitResult {
    type Output;
    /// Returns Some(output) if we should stop waiting, None if we should continue
    fn result(self) -> Option<Self::Output>;
}

// Blanket impl for bool: true = stop with (), false = continue waiting
impl WaitResult for bool {
    type Output = ();
    fn result(self) -> Option<Self::Output> { if self { Some(()) } else { None } }
}

// Blanket impl for Option<T>: Some(value) = stop with value, None = continue waiting
impl<T> WaitResult for Option<T> {
    type Output = T;
    fn result(self) -> Option<Self::Output> { self }
}

#[cfg(feature = "tokio")]
impl<T> Wait<T> for Reactive<T>
where T: Clone + Send + Sync + 'static
{
    fn wait_value(&self, target_value: T) -> impl std::future::Future<Output = ()> + Send
    where T: PartialEq + Clone + Send + Sync {
        async move {
            // The current value may already match
            if self.with(|v| *v == target_value) {
                return;
            }

            // Bridge the synchronous broadcast into async via a channel
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
            let _subscription = self.subscribe(move |_: &T| {
                let _ = tx.send(());
            });

            // Loop over notifications until we find a match
            loop {
                match rx.recv().await {
                    Some(_) => {
                        if self.with(|v| *v == target_value) {
                            break;
                        }
                    }
                    None => {
                        // Channel was closed, stop waiting
                        break;
                    }
                }
            }
        }
    }

    fn wait_for<F, R>(&self, predicate: F) -> impl std::future::Future<Output = R::Output> + Send
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: WaitResult,
        T: Send + Sync,
    {
        async move {
            // The current value may already match
            if let Some(result) = self.with(|value| predicate(value).result()) {
                return result;
            }

            // Bridge the synchronous broadcast into async via a channel
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
            let _subscription = self.subscribe(move |_: &T| {
                let _ = tx.send(());
            });

            loop {
                match rx.recv().await {
                    Some(_) => {
                        if let Some(result) = self.with(|value| predicate(value).result()) {
                            return result;
                        }
                    }
                    None => break,
                }
            }

            // The sender lives in our own subscription, which we hold until
            // this future completes
            unreachable!("subscription channel closed while still waiting");
        }
    }
}
