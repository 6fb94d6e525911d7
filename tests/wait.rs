#![cfg(feature = "tokio")]

use bindable::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_wait_value_resolves_on_current_value() {
    let value = Reactive::new(5);
    value.wait_value(5).await;
}

#[tokio::test]
async fn test_wait_value_resolves_on_later_update() {
    let value = Arc::new(Reactive::new(0));

    let waiter = {
        let value = value.clone();
        tokio::spawn(async move { value.wait_value(3).await })
    };

    // Give the waiter a chance to subscribe before updating
    tokio::time::sleep(Duration::from_millis(10)).await;
    value.update(1);
    value.update(3);

    tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
}

#[tokio::test]
async fn test_wait_for_predicate_returns_matching_value() {
    let value = Arc::new(Reactive::new(1));

    let waiter = {
        let value = value.clone();
        tokio::spawn(async move { value.wait_for(|v: &i32| if *v > 10 { Some(*v) } else { None }).await })
    };

    tokio::time::sleep(Duration::from_millis(10)).await;
    value.update(5);
    value.update(42);

    let matched = tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
    assert_eq!(matched, 42);
}

#[tokio::test]
async fn test_wait_for_bool_predicate() {
    let value = Reactive::new(2);
    value.wait_for(|v: &i32| *v % 2 == 0).await;
}
