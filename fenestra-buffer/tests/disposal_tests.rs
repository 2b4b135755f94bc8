// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_buffer::{BufferDebounceExt, BufferTimeExt, BufferWhenExt};
use fenestra_runtime::TokioScheduler;
use fenestra_test_utils::{
    helpers::expect_completed,
    test_channel,
    test_data::{person_alice, person_bob},
    TestData,
};
use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_buffer_time_disposal_is_idempotent_and_silent() -> anyhow::Result<()> {
    pause();

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_time(Duration::from_millis(500), 3, TokioScheduler);
    yield_now().await;

    tx.send(person_alice())?;
    yield_now().await;

    // Act - Double disposal must not panic, double-free or emit
    windows.dispose();
    windows.dispose();
    yield_now().await;

    // Assert - No flush of the buffered element, no heartbeat after the span
    assert!(windows.is_disposed());
    advance(Duration::from_millis(1000)).await;
    yield_now().await;
    expect_completed(&mut windows, 100).await;

    // Late source pushes go nowhere
    let _ = tx.send(person_bob());
    yield_now().await;
    expect_completed(&mut windows, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_buffer_when_disposal_releases_both_subscriptions() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let (boundary_tx, boundary) = test_channel::<()>();
    let mut windows = source.buffer_when(boundary);
    yield_now().await;

    tx.send(person_alice())?;
    yield_now().await;

    // Act
    windows.dispose();
    windows.dispose();
    yield_now().await;

    // Assert - A boundary tick after disposal produces nothing
    let _ = boundary_tx.send(());
    yield_now().await;
    assert!(windows.is_disposed());
    expect_completed(&mut windows, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_buffer_debounce_disposal_closes_the_shared_source() -> anyhow::Result<()> {
    pause();

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_debounce(Duration::from_millis(500), TokioScheduler);
    yield_now().await;

    tx.send(person_alice())?;
    yield_now().await;

    // Act
    windows.dispose();
    windows.dispose();
    yield_now().await;

    // Assert - No quiescence flush after disposal
    advance(Duration::from_millis(1000)).await;
    yield_now().await;
    assert!(windows.is_disposed());
    expect_completed(&mut windows, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_drop_releases_the_subscription() -> anyhow::Result<()> {
    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let windows = source.buffer_when({
        let (boundary_tx, boundary) = test_channel::<()>();
        // Keep the boundary alive past this block
        std::mem::forget(boundary_tx);
        boundary
    });
    yield_now().await;

    // Act - Dropping the stream is the ordinary cancellation path
    drop(windows);
    yield_now().await;
    yield_now().await;

    // Assert - The cancelled pump dropped its receiver, so the source side
    // observes the released subscription as a closed channel
    assert!(tx.send(person_alice()).is_err());

    Ok(())
}
