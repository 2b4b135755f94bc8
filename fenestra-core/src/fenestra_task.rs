// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle with cooperative cancellation.
//!
//! Engines use one `FenestraTask` per subscription they drive: the spawned
//! pump polls an upstream and forwards events into the engine's synchronized
//! handler until the stream terminates or the task is cancelled. The token is
//! signalled automatically on drop, so abandoning the handle releases the
//! upstream.

use crate::cancellation_token::CancellationToken;
use crate::disposable::Disposable;
use std::future::Future;

/// Handle to a spawned background task, cancelled on drop.
///
/// The spawned future receives a [`CancellationToken`] it must monitor to
/// exit promptly once cancellation is requested. Must be called from within
/// a tokio runtime.
///
/// # Example
///
/// ```
/// use fenestra_core::FenestraTask;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task = FenestraTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// task.cancel();
/// # }
/// ```
#[derive(Debug)]
pub struct FenestraTask {
    cancel: CancellationToken,
}

impl FenestraTask {
    /// Spawn a background task with cancellation support.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Request cancellation without waiting for the task to finish.
    ///
    /// The task stops at its next cancellation checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for FenestraTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl Disposable for FenestraTask {
    fn dispose(&self) {
        self.cancel();
    }

    fn is_disposed(&self) -> bool {
        self.is_cancelled()
    }
}
