// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Downstream surface of every buffering operator.
//!
//! A [`WindowStream`] yields the emitted windows as
//! `StreamItem<Vec<T>>` and owns the subscription that drives them: the
//! source pump, the boundary pump (if any), the outstanding timer and the
//! shared-source guard all live in one composite handle. Dropping the stream
//! or calling [`WindowStream::dispose`] releases all of them, silently and
//! idempotently.

use async_channel::Receiver;
use fenestra_core::{BoxDisposable, CompositeDisposable, Disposable, FenestraError, StreamItem};
use futures::Stream;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

/// Stream of windows produced by a buffering engine.
pub struct WindowStream<T> {
    // `async_channel::Receiver` is `!Unpin`; pinning it in a box keeps
    // `WindowStream` itself `Unpin` while allowing the receiver to be polled.
    windows: Pin<Box<Receiver<StreamItem<Vec<T>>>>>,
    subscription: CompositeDisposable,
    // Set only by explicit cancellation, never by engine-side termination:
    // terminal events already queued (final window, error) must still be
    // delivered, while nothing may surface after a user dispose()
    cancelled: AtomicBool,
}

impl<T> WindowStream<T> {
    pub(crate) fn new(
        windows: Receiver<StreamItem<Vec<T>>>,
        subscription: CompositeDisposable,
    ) -> Self {
        Self {
            windows: Box::pin(windows),
            subscription,
            cancelled: AtomicBool::new(false),
        }
    }

    /// A stream that emits `err` immediately and then completes.
    ///
    /// Used when collaborator wiring fails before an engine could start, so
    /// the failure still surfaces through the ordinary error channel.
    pub(crate) fn failed(err: FenestraError) -> Self {
        let (tx, rx) = async_channel::unbounded();
        let _ = tx.try_send(StreamItem::Error(err));
        tx.close();
        Self::new(rx, CompositeDisposable::new())
    }

    /// Tie an additional resource to this subscription's lifetime.
    pub(crate) fn attach(&self, resource: BoxDisposable) {
        self.subscription.add(resource);
    }

    /// Cancel the subscription: release the source and boundary
    /// subscriptions and any outstanding timer.
    ///
    /// Silent (no final flush, no synthesized error), idempotent, and safe
    /// from any context. Nothing is emitted after cancellation, including
    /// windows that were already in flight. Also runs on drop.
    pub fn dispose(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.subscription.dispose();
    }

    /// Returns `true` once the subscription has been released.
    pub fn is_disposed(&self) -> bool {
        self.subscription.is_disposed()
    }
}

impl<T> Stream for WindowStream<T> {
    type Item = StreamItem<Vec<T>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.cancelled.load(Ordering::SeqCst) {
            return Poll::Ready(None);
        }
        this.windows.as_mut().poll_next(cx)
    }
}

impl<T> Drop for WindowStream<T> {
    fn drop(&mut self) {
        self.subscription.dispose();
    }
}
