// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_runtime::TokioScheduler;
use fenestra_stream::DebounceExt;
use fenestra_test_utils::{
    helpers::{assert_no_element_emitted, expect_completed, expect_error, expect_value, test_error},
    test_channel,
    test_data::{person_alice, person_bob, person_charlie},
    TestData,
};
use std::time::Duration;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_debounce_emits_after_quiet_period() -> anyhow::Result<()> {
    pause(); // Mock time for instant test execution

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut debounced = Box::pin(source.debounce(Duration::from_millis(500), TokioScheduler));

    // Act - Send first value
    tx.send(person_alice())?;

    // Assert - Should NOT arrive while the quiescence window is open
    assert_no_element_emitted(&mut debounced, 10).await;

    advance(Duration::from_millis(300)).await;
    assert_no_element_emitted(&mut debounced, 10).await;

    // Should arrive once the full quiet period has elapsed
    advance(Duration::from_millis(200)).await;
    expect_value(&mut debounced, person_alice(), 100).await;

    Ok(())
}

#[tokio::test]
async fn test_debounce_resets_on_new_value() -> anyhow::Result<()> {
    pause();

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut debounced = Box::pin(source.debounce(Duration::from_millis(500), TokioScheduler));

    // Act - Send Alice, wait less than the quiet period
    tx.send(person_alice())?;
    assert_no_element_emitted(&mut debounced, 10).await;
    advance(Duration::from_millis(300)).await;
    assert_no_element_emitted(&mut debounced, 10).await;

    // Bob resets the timer and supersedes Alice
    tx.send(person_bob())?;
    assert_no_element_emitted(&mut debounced, 10).await;

    advance(Duration::from_millis(300)).await;
    assert_no_element_emitted(&mut debounced, 10).await;

    // Assert - 500ms after Bob, only Bob is emitted
    advance(Duration::from_millis(200)).await;
    expect_value(&mut debounced, person_bob(), 100).await;

    Ok(())
}

#[tokio::test]
async fn test_debounce_flushes_pending_value_on_stream_end() -> anyhow::Result<()> {
    pause();

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut debounced = Box::pin(source.debounce(Duration::from_millis(500), TokioScheduler));

    // Act - Completion before the quiet period elapses
    tx.send(person_charlie())?;
    assert_no_element_emitted(&mut debounced, 10).await;
    tx.close();

    // Assert - The pending value is flushed immediately
    expect_value(&mut debounced, person_charlie(), 100).await;
    expect_completed(&mut debounced, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_debounce_passes_errors_through_immediately() -> anyhow::Result<()> {
    pause();

    // Arrange
    let (tx, source) = test_channel::<TestData>();
    let mut debounced = Box::pin(source.debounce(Duration::from_millis(500), TokioScheduler));

    // Act - A pending value exists when the error arrives
    tx.send(person_alice())?;
    assert_no_element_emitted(&mut debounced, 10).await;
    tx.error(test_error())?;

    // Assert - The error is not debounced and discards the pending value
    expect_error(&mut debounced, 100).await;

    Ok(())
}
