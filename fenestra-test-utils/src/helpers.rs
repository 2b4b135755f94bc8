// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::{FenestraError, StreamItem};
use futures::stream::StreamExt;
use futures::Stream;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::sleep;

/// Error value used to inject upstream failures in tests.
pub fn test_error() -> FenestraError {
    FenestraError::stream_error("injected test failure")
}

/// Asserts that `stream` emits nothing within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    tokio::select! {
        item = stream.next() => {
            panic!("Unexpected emission, expected no output: {item:?}");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Reads the next item, giving up after `timeout_ms`.
///
/// Returns `None` both on timeout and on end-of-stream; use
/// [`expect_completed`] to assert completion specifically.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> Option<T>
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => item,
        () = sleep(Duration::from_millis(timeout_ms)) => None,
    }
}

/// Asserts that the next emission is a window with exactly `expected` content.
pub async fn expect_window<S, T>(stream: &mut S, expected: &[T], timeout_ms: u64)
where
    S: Stream<Item = StreamItem<Vec<T>>> + Unpin,
    T: Clone + Debug + PartialEq,
{
    match unwrap_stream(stream, timeout_ms).await {
        Some(StreamItem::Value(window)) => assert_eq!(window, expected.to_vec()),
        other => panic!("expected window {expected:?}, got {other:?}"),
    }
}

/// Asserts that the next emission is the given value.
pub async fn expect_value<S, T>(stream: &mut S, expected: T, timeout_ms: u64)
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    T: Debug + PartialEq,
{
    match unwrap_stream(stream, timeout_ms).await {
        Some(StreamItem::Value(value)) => assert_eq!(value, expected),
        other => panic!("expected value {expected:?}, got {other:?}"),
    }
}

/// Asserts that the next emission is an in-band error.
pub async fn expect_error<S, T>(stream: &mut S, timeout_ms: u64) -> FenestraError
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    T: Debug,
{
    match unwrap_stream(stream, timeout_ms).await {
        Some(StreamItem::Error(err)) => err,
        other => panic!("expected error, got {other:?}"),
    }
}

/// Asserts that the stream completes (ends) within `timeout_ms`.
pub async fn expect_completed<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    tokio::select! {
        item = stream.next() => {
            assert!(item.is_none(), "expected completion, got {item:?}");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("stream did not complete within {timeout_ms}ms");
        }
    }
}
