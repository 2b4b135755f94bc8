// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Fenestra
//!
//! Windowing and buffering operators for asynchronous event sequences.
//!
//! ## Overview
//!
//! Fenestra consumes a stream of elements and re-emits them as discrete,
//! ordered windows. A window closes on element count, on elapsed time, or on
//! an externally signalled boundary event — three independent event sources
//! coordinated under one race-free state machine per subscription, with
//! strict downstream ordering and idempotent cancellation.
//!
//! ## Operators
//!
//! - [`BufferTimeExt::buffer_time`] — close on count or timespan, whichever
//!   fires first; idle pipelines emit empty heartbeat windows.
//! - [`BufferWhenExt::buffer_when`] — close on emissions of a second,
//!   independently subscribed boundary sequence; empty windows suppressed.
//! - [`BufferDebounceExt::buffer_debounce`] — close when the source goes
//!   quiet, built from `share` + `debounce` + `buffer_when`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fenestra::prelude::*;
//! use fenestra_core::StreamItem;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (tx, rx) = async_channel::unbounded::<StreamItem<String>>();
//!     // `Receiver` is `!Unpin`; pin it so it satisfies the operator's bounds.
//!     let rx = Box::pin(rx);
//!     let mut windows = rx.buffer_time(Duration::from_secs(1), 16, TokioScheduler);
//!     // Poll `windows` for StreamItem<Vec<String>> batches.
//! }
//! ```

// Re-export core types
pub use fenestra_core::{
    CancellationToken, CompositeDisposable, Disposable, FenestraError, FenestraSubject,
    FenestraTask, Result, SerialDisposable, SingleAssignmentDisposable, StreamItem, SubjectError,
};

// Re-export the operator surface
pub use fenestra_buffer::{BufferDebounceExt, BufferTimeExt, BufferWhenExt, WindowStream};
pub use fenestra_runtime::{Scheduler, TimerHandle, TokioScheduler};
pub use fenestra_stream::{DebounceExt, FenestraShared, ShareExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use fenestra_buffer::prelude::*;
    pub use fenestra_core::{Disposable, StreamItem};
    pub use fenestra_runtime::{Scheduler, TokioScheduler};
    pub use fenestra_stream::prelude::*;
}
