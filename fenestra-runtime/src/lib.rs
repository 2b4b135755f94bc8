// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
pub mod impls;
pub mod scheduler;

pub use self::impls::tokio::TokioScheduler;
pub use self::scheduler::{ScheduledAction, Scheduler, TimerHandle};
