// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, unbounded subject that broadcasts items to all current subscribers.
//!
//! `FenestraSubject` is the push entry point into a fenestra pipeline and the
//! multicast primitive behind [`share`]: every subscriber receives the same
//! items in the same order, and late subscribers do not receive previously
//! sent items.
//!
//! [`share`]: https://docs.rs/fenestra-stream
//!
//! # Example
//!
//! ```
//! use fenestra_core::{FenestraSubject, StreamItem};
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let subject = FenestraSubject::new();
//! let mut items = subject.subscribe()?;
//!
//! subject.next(7)?;
//! subject.close();
//!
//! assert_eq!(items.next().await, Some(StreamItem::Value(7)));
//! assert!(items.next().await.is_none());
//! # Ok(())
//! # }
//! ```

use crate::error::FenestraError;
use crate::stream_item::StreamItem;
use crate::subject_error::SubjectError;
use async_channel::Sender;
use futures::stream::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed subscriber stream handed out by [`FenestraSubject::subscribe`].
pub type SubjectBoxStream<T> = Pin<Box<dyn Stream<Item = StreamItem<T>> + Send + 'static>>;

struct SubjectState<T> {
    closed: bool,
    senders: Vec<Sender<StreamItem<T>>>,
}

/// A hot, unbounded multicast subject.
pub struct FenestraSubject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> FenestraSubject<T> {
    /// Creates a new open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject and receive a stream of `StreamItem<T>`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectBoxStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let (tx, rx) = async_channel::unbounded();
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Send an item to all active subscribers.
    ///
    /// Subscribers whose receiving side has been dropped are pruned here.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, item: StreamItem<T>) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let mut next_senders = Vec::with_capacity(state.senders.len());
        for tx in state.senders.drain(..) {
            if tx.try_send(item.clone()).is_ok() {
                next_senders.push(tx);
            }
        }
        state.senders = next_senders;
        Ok(())
    }

    /// Send a value to all active subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamItem::Value(value))
    }

    /// Send a stream error to all subscribers and terminate the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject was already closed.
    pub fn error(&self, err: FenestraError) -> Result<(), SubjectError> {
        let result = self.send(StreamItem::Error(err));
        self.close();
        result
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// After closing, `send`, `next`, `error` and `subscribe` all refuse with
    /// `SubjectError::Closed`. Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of currently active subscribers.
    ///
    /// Dropped subscribers are pruned lazily on the next `send`, not the
    /// moment their stream is dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for FenestraSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for FenestraSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
