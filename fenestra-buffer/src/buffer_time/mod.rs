// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `buffer_time` operator for streams.
//!
//! Collects elements into windows that close on whichever of two triggers
//! fires first:
//!
//! - **Count**: the window reaches the configured maximum size. The window
//!   is emitted immediately (it is never empty on this path) and a fresh
//!   timer is started for the new window.
//! - **Time**: the configured timespan elapses. The window is emitted
//!   **unconditionally**, including when it is empty — an idle pipeline
//!   produces a steady heartbeat of empty windows. This mirrors the
//!   ReactiveX `bufferTime` contract and is load-bearing for consumers that
//!   treat windows as liveness ticks.
//!
//! Source completion flushes the pending window unconditionally (possibly
//! empty, possibly partial) before the stream ends. A source error discards
//! the pending window: buffered-but-unflushed elements are never delivered
//! after a failure.
//!
//! Each rotation schedules exactly one new timer keyed to the new rotation
//! id; a timer that fires for a superseded rotation no-ops.
//!
//! # Example
//!
//! ```no_run
//! use fenestra_buffer::BufferTimeExt;
//! use fenestra_core::StreamItem;
//! use fenestra_runtime::TokioScheduler;
//! use futures::stream;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter([1, 2, 3, 4, 5].map(StreamItem::Value));
//! // Windows of at most 2 elements, flushed at least every second.
//! let windows = source.buffer_time(Duration::from_secs(1), 2, TokioScheduler);
//! # }
//! ```

mod implementation;

pub use implementation::BufferTimeExt;
