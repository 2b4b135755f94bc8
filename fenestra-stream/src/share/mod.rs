// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait converting a stream into a multi-subscriber source.
//!
//! `share` consumes the upstream exactly once and broadcasts its events to
//! every subscriber through a [`FenestraSubject`](fenestra_core::FenestraSubject):
//! all subscribers observe the same elements, in the same order, relative to
//! each other. This is the multicast guarantee the debounce-buffer
//! composition relies on when it observes one source along two paths.
//!
//! Dropping the [`FenestraShared`] handle closes the subject and releases the
//! upstream subscription.
//!
//! # Example
//!
//! ```no_run
//! use fenestra_core::StreamItem;
//! use fenestra_stream::ShareExt;
//! use futures::stream;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let source = stream::iter([1, 2, 3].map(StreamItem::Value));
//! let shared = source.share();
//!
//! let first = shared.subscribe()?;
//! let second = shared.subscribe()?;
//! // Both observers now receive identical events.
//! # Ok(())
//! # }
//! ```

mod implementation;

pub use implementation::{FenestraShared, ShareExt, SharedBoxStream};
