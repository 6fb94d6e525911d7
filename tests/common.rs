use std::sync::{Arc, Mutex};

/// Accumulates values delivered to a handler so tests can assert on exactly
/// what arrived, in order. `check` drains, so each assertion covers only the
/// deliveries since the previous one.
#[allow(unused)]
pub fn change_watcher<T: Send + Sync + 'static>() -> (Box<dyn Fn(T) + Send + Sync>, Box<dyn Fn() -> Vec<T> + Send + Sync>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let watcher = {
        let changes = changes.clone();
        Box::new(move |value: T| {
            changes.lock().unwrap().push(value);
        })
    };

    let check = Box::new(move || {
        let changes: Vec<T> = changes.lock().unwrap().drain(..).collect();
        changes
    });

    (watcher, check)
}

#[allow(unused)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
