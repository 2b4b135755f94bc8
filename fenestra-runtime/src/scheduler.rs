// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred-execution collaborator consumed by the windowing engines.
//!
//! A [`Scheduler`] covers the two ways time enters a pipeline:
//!
//! - [`Scheduler::schedule_relative`] registers a one-shot callback fired
//!   after a relative delay, returning a [`TimerHandle`] that cancels it.
//!   Registration is synchronous; the callback runs later, from the
//!   scheduler's own context, and must acquire whatever locks it needs
//!   freshly at that point.
//! - [`Scheduler::sleep_future`] hands out a plain sleep future for
//!   poll-based operators such as debounce.
//!
//! Cancellation through the handle is best-effort: a callback racing its own
//! cancellation may still fire, so callers guard deferred actions with their
//! own staleness check (the windowing engines compare rotation ids).

use fenestra_core::{CancellationToken, Disposable, Result};
use std::future::Future;
use std::time::Duration;

/// One-shot action registered with [`Scheduler::schedule_relative`].
pub type ScheduledAction = Box<dyn FnOnce() + Send>;

/// Collaborator that executes deferred work after a relative delay.
pub trait Scheduler: Clone + Send + Sync + 'static {
    /// Future returned by [`Scheduler::sleep_future`].
    type Sleep: Future<Output = ()> + Send;

    /// Returns a future that resolves once `due` has elapsed.
    fn sleep_future(&self, due: Duration) -> Self::Sleep;

    /// Invoke `action` once after `due` elapses, unless the returned handle
    /// is disposed first. May be called from any thread.
    ///
    /// # Errors
    ///
    /// Returns `FenestraError::ScheduleError` if the timer cannot be
    /// registered.
    fn schedule_relative(&self, due: Duration, action: ScheduledAction) -> Result<TimerHandle>;
}

/// Cancellable handle to one scheduled action.
///
/// Disposing the handle prevents the action from running if it has not fired
/// yet; disposal after firing is a no-op.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    cancel: CancellationToken,
}

impl TimerHandle {
    /// Wrap the cancellation token observed by the scheduled action.
    #[must_use]
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Request cancellation of the pending action.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Disposable for TimerHandle {
    fn dispose(&self) {
        self.cancel();
    }

    fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
