// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `debounce` operator for streams.
//!
//! The debounce operator waits for a pause in the input stream of at least
//! the given duration before emitting the latest value. If a new value
//! arrives before the duration elapses, the timer is reset and only the
//! newest value is eventually emitted.
//!
//! This implements **trailing debounce** semantics:
//! - When a value arrives, start/restart the quiescence timer
//! - If no new value arrives before the timer expires, emit the latest value
//! - If a new value arrives, discard the pending value and restart the timer
//! - When the stream ends, emit any pending value immediately
//!
//! Errors pass through immediately without debounce, to ensure timely error
//! propagation.
//!
//! Used as the boundary-deriving collaborator of the debounce-buffer
//! composition: each emission marks the end of a quiescence interval on the
//! shared source.
//!
//! # Example
//!
//! ```no_run
//! use fenestra_core::StreamItem;
//! use fenestra_runtime::TokioScheduler;
//! use fenestra_stream::DebounceExt;
//! use futures::stream;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter([1, 2, 3].map(StreamItem::Value));
//! // Only the value that survives 100ms without a successor is emitted.
//! let debounced = source.debounce(Duration::from_millis(100), TokioScheduler);
//! # }
//! ```

mod implementation;

pub use implementation::DebounceExt;
