// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::CancellationToken;

#[test]
fn test_cancel_is_observable_and_idempotent() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());

    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_wakes_waiter() {
    let token = CancellationToken::new();
    let waiter = token.clone();

    let handle = tokio::spawn(async move {
        waiter.cancelled().await;
    });

    token.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_cancelled_resolves_immediately_when_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();
    token.cancelled().await;
}

#[tokio::test]
async fn test_clones_observe_shared_state() {
    let token = CancellationToken::new();
    let clone = token.clone();

    clone.cancel();
    assert!(token.is_cancelled());
    token.cancelled().await;
}
