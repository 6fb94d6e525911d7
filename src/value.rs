use std::sync::RwLock;

/// Interior-mutable cell holding the current value.
///
/// The lock is only ever held for the duration of a store or a borrow -
/// never across listener callbacks.
pub(crate) struct ValueCell<T>(RwLock<T>);

impl<T> ValueCell<T> {
    pub fn new(value: T) -> Self { Self(RwLock::new(value)) }

    pub fn set(&self, value: T) {
        let mut current = self.0.write().unwrap();
        *current = value;
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.0.read().unwrap();
        f(&*guard)
    }
}

impl<T: Clone> ValueCell<T> {
    pub fn value(&self) -> T { self.0.read().unwrap().clone() }
}
