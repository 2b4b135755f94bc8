// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::{ScheduledAction, Scheduler, TimerHandle};
use fenestra_core::{CancellationToken, Result};
use futures::future::{select, Either};
use futures::pin_mut;
use std::time::Duration;

/// [`Scheduler`] backed by the tokio time driver.
///
/// Scheduled actions run on a spawned task, so they always re-enter engine
/// state through a fresh lock acquisition. Honors `tokio::time::pause` in
/// tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    type Sleep = tokio::time::Sleep;

    fn sleep_future(&self, due: Duration) -> Self::Sleep {
        tokio::time::sleep(due)
    }

    fn schedule_relative(&self, due: Duration, action: ScheduledAction) -> Result<TimerHandle> {
        let cancel = CancellationToken::new();
        let watcher = cancel.clone();

        tokio::spawn(async move {
            let sleep = tokio::time::sleep(due);
            pin_mut!(sleep);
            if let Either::Left(((), _)) = select(sleep, watcher.cancelled()).await {
                action();
            }
        });

        Ok(TimerHandle::new(cancel))
    }
}
