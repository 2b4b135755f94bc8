// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end coverage of the public facade: every operator reachable
//! through the prelude, driven the way a consumer would.

use fenestra::prelude::*;
use fenestra_test_utils::{
    helpers::{expect_completed, expect_window},
    test_channel,
    test_data::{animal_dog, animal_spider, person_alice, person_bob},
    TestData,
};
use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_buffer_time_through_the_facade() -> anyhow::Result<()> {
    pause();

    let (tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_time(Duration::from_millis(500), 2, TokioScheduler);
    yield_now().await;

    tx.send(person_alice())?;
    tx.send(person_bob())?;
    yield_now().await;
    expect_window(&mut windows, &[person_alice(), person_bob()], 100).await;

    tx.close();
    yield_now().await;
    expect_window(&mut windows, &[], 100).await;
    expect_completed(&mut windows, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_shared_source_feeds_boundary_buffering() -> anyhow::Result<()> {
    // Wire buffer_when by hand from the collaborator operators, the way
    // buffer_debounce composes them internally
    let (tx, source) = test_channel::<TestData>();
    let (boundary_tx, boundary) = test_channel::<()>();

    let shared = source.share();
    let data = shared.subscribe()?;
    let mut windows = data.buffer_when(boundary);
    yield_now().await;

    tx.send(animal_dog())?;
    tx.send(animal_spider())?;
    yield_now().await;
    boundary_tx.send(())?;
    yield_now().await;

    expect_window(&mut windows, &[animal_dog(), animal_spider()], 100).await;

    Ok(())
}

#[tokio::test]
async fn test_buffer_debounce_through_the_facade() -> anyhow::Result<()> {
    pause();

    let (tx, source) = test_channel::<TestData>();
    let mut windows = source.buffer_debounce(Duration::from_millis(250), TokioScheduler);
    yield_now().await;

    tx.send(person_alice())?;
    yield_now().await;
    advance(Duration::from_millis(250)).await;
    yield_now().await;

    expect_window(&mut windows, &[person_alice()], 100).await;

    Ok(())
}
