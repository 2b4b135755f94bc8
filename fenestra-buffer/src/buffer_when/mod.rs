// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `buffer_when` operator for streams.
//!
//! Collects elements into windows closed by a second, independently
//! subscribed **boundary** sequence: every boundary emission closes the
//! current window, and boundary completion closes the subscription itself.
//! Only the boundary drives rotation; source elements are merely
//! accumulated.
//!
//! Unlike the timer rotations of
//! [`buffer_time`](crate::buffer_time::BufferTimeExt::buffer_time), boundary
//! ticks **suppress empty windows**: a tick with nothing buffered produces
//! no emission. The same applies to the completion flush, on either the
//! source or the boundary path. This asymmetry between the two operators is
//! deliberate and mirrors their ReactiveX counterparts; do not unify it.
//!
//! Whichever of source and boundary reaches a terminal condition first wins,
//! and a single composite disposal releases both subscriptions. Errors on
//! either stream discard the pending window.
//!
//! # Example
//!
//! ```no_run
//! use fenestra_buffer::BufferWhenExt;
//! use fenestra_core::StreamItem;
//! use futures::stream;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter([1, 2, 3].map(StreamItem::Value));
//! let boundary = stream::iter([(), ()].map(StreamItem::Value));
//! let windows = source.buffer_when(boundary);
//! # }
//! ```

mod implementation;

pub use implementation::BufferWhenExt;
