// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_buffer::BufferDebounceExt;
use fenestra_runtime::TokioScheduler;
use fenestra_test_utils::{
    helpers::{
        assert_no_element_emitted, expect_completed, expect_error, expect_window, test_error,
    },
    test_channel,
    test_data::{animal_dog, person_alice, person_bob, person_charlie},
    TestData,
};
use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_burst_is_flushed_after_quiescence() -> anyhow::Result<()> {
    pause(); // Mock time for instant test execution

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_debounce(Duration::from_millis(500), TokioScheduler);
    yield_now().await;

    // Act - A burst of two elements within the quiescence interval
    tx.send(person_alice())?;
    yield_now().await;
    advance(Duration::from_millis(100)).await;
    yield_now().await;
    tx.send(person_bob())?;
    yield_now().await;
    assert_no_element_emitted(&mut windows, 10).await;

    // Quiescence elapses after the last element of the burst
    advance(Duration::from_millis(490)).await;
    yield_now().await;

    // Assert
    expect_window(&mut windows, &[person_alice(), person_bob()], 100).await;

    Ok(())
}

#[tokio::test]
async fn test_each_burst_becomes_its_own_window() -> anyhow::Result<()> {
    pause();

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_debounce(Duration::from_millis(500), TokioScheduler);
    yield_now().await;

    // Act - First burst
    tx.send(person_alice())?;
    yield_now().await;
    advance(Duration::from_millis(500)).await;
    yield_now().await;
    expect_window(&mut windows, &[person_alice()], 100).await;

    // Second burst
    tx.send(person_bob())?;
    tx.send(person_charlie())?;
    yield_now().await;
    advance(Duration::from_millis(500)).await;
    yield_now().await;

    // Assert
    expect_window(&mut windows, &[person_bob(), person_charlie()], 100).await;

    Ok(())
}

#[tokio::test]
async fn test_quiet_source_emits_nothing() -> anyhow::Result<()> {
    pause();

    // Arrange - No elements, so no debounce tick and no window (unlike the
    // heartbeat behavior of buffer_time)
    let (_tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_debounce(Duration::from_millis(500), TokioScheduler);
    yield_now().await;

    // Act
    advance(Duration::from_millis(2000)).await;
    yield_now().await;

    // Assert
    assert_no_element_emitted(&mut windows, 10).await;

    Ok(())
}

#[tokio::test]
async fn test_completion_flushes_pending_burst() -> anyhow::Result<()> {
    pause();

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_debounce(Duration::from_millis(500), TokioScheduler);
    yield_now().await;

    // Act - Completion before the quiescence interval elapses
    tx.send(animal_dog())?;
    yield_now().await;
    tx.close();
    yield_now().await;

    // Assert
    expect_window(&mut windows, &[animal_dog()], 100).await;
    expect_completed(&mut windows, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_error_drops_pending_burst() -> anyhow::Result<()> {
    pause();

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_debounce(Duration::from_millis(500), TokioScheduler);
    yield_now().await;

    // Act
    tx.send(person_alice())?;
    yield_now().await;
    tx.error(test_error())?;
    yield_now().await;

    // Assert - Both observers of the shared source see the failure; the
    // buffered element is never delivered
    expect_error(&mut windows, 100).await;
    expect_completed(&mut windows, 100).await;

    Ok(())
}
