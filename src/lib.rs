/*!
An observable value primitive for UI binding.

[`Reactive`] holds a value of any type `T` and notifies bound listeners every
time the value is updated, so a model property can keep one or more view
objects synchronized without the model knowing about the views' lifetimes.

# Design requirements:
- Listeners are arbitrary caller-owned objects; binding must never extend
  their lifetime (the registry holds weak handles only)
- A destroyed listener is pruned automatically on the next registry
  operation, never notified again, and never an error
- Every update notifies - no equality suppression
- Notification order is bind order
- Reentrant handlers (bind/unbind/update from inside a notification) must
  not corrupt the in-progress broadcast

# Nomenclature:
- `bind_now` / `subscribe_now` - immediately call the handler with the
  current value, and again for every future update. Delivers the present
  state to a newly attached observer.
- `bind` / `subscribe` - only call the handler when the value is updated.

# Basic usage

```rust
use bindable::*;
use std::sync::{Arc, Mutex};

let label = Arc::new(Mutex::new(String::new()));
let title = Reactive::new("untitled".to_string());

title.bind_now(&label, |label, value| {
    *label.lock().unwrap() = value.clone();
});
assert_eq!(*label.lock().unwrap(), "untitled");

title.update("hello".to_string());
assert_eq!(*label.lock().unwrap(), "hello");

// Dropping the label unbinds it; the next update goes nowhere
drop(label);
title.update("goodbye".to_string());
```

# Subscription usage

```rust
use bindable::*;

let count = Reactive::new(0);
let guard = count.subscribe(|value: &i32| println!("count: {value}"));
count.update(1);
// Should print:
// count: 1
drop(guard);
count.update(2); // not printed
```
*/

mod broadcast;
mod porcelain;
mod reactive;
mod value;

pub use broadcast::*;
pub use porcelain::*;
pub use reactive::*;
