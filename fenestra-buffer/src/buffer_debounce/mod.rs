// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `buffer_debounce` operator for streams.
//!
//! A derived operator, not a new state machine: it batches elements into a
//! window whenever the source goes quiet for the configured interval. The
//! source is multicast once through
//! [`share`](fenestra_stream::ShareExt::share); one subscription feeds
//! [`buffer_when`](crate::buffer_when::BufferWhenExt::buffer_when) as the
//! data path, and a [`debounced`](fenestra_stream::DebounceExt::debounce)
//! second subscription of the same shared source serves as the boundary.
//! Correctness rests on the multicast guarantee: both paths observe exactly
//! the same elements exactly once, in the same order relative to each other.
//!
//! Because a debounce tick only ever follows at least one element, the
//! empty-window suppression of `buffer_when` makes every emitted window
//! non-empty here.
//!
//! # Example
//!
//! ```no_run
//! use fenestra_buffer::BufferDebounceExt;
//! use fenestra_core::StreamItem;
//! use fenestra_runtime::TokioScheduler;
//! use futures::stream;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter([1, 2, 3].map(StreamItem::Value));
//! // One window per burst, closed after 250ms of silence.
//! let windows = source.buffer_debounce(Duration::from_millis(250), TokioScheduler);
//! # }
//! ```

mod implementation;

pub use implementation::BufferDebounceExt;
