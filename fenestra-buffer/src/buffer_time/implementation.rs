// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::warn;
use crate::window::WindowAccumulator;
use crate::window_stream::WindowStream;
use async_channel::Sender;
use fenestra_core::fenestra_mutex::Mutex;
use fenestra_core::{
    CompositeDisposable, Disposable, FenestraError, FenestraTask, SerialDisposable,
    SingleAssignmentDisposable, StreamItem,
};
use fenestra_runtime::{ScheduledAction, Scheduler};
use futures::future::{select, Either};
use futures::{Stream, StreamExt};
use std::sync::Arc;
use std::time::Duration;

/// Extension trait providing the `buffer_time` operator.
pub trait BufferTimeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Buffers elements into windows closed by element count or elapsed
    /// time, whichever occurs first.
    ///
    /// See the [module documentation](crate::buffer_time) for the full
    /// semantics, including the unconditional empty heartbeat windows on
    /// timer rotations.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    fn buffer_time<Sch>(self, timespan: Duration, count: usize, scheduler: Sch) -> WindowStream<T>
    where
        Self: Send + Unpin + 'static,
        T: Send + 'static,
        Sch: Scheduler;
}

impl<S, T> BufferTimeExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn buffer_time<Sch>(self, timespan: Duration, count: usize, scheduler: Sch) -> WindowStream<T>
    where
        Self: Send + Unpin + 'static,
        T: Send + 'static,
        Sch: Scheduler,
    {
        assert!(count > 0, "buffer_time requires a count of at least 1");

        let (tx, rx) = async_channel::unbounded();
        let subscription = CompositeDisposable::new();
        let engine = TimedBufferEngine::new(timespan, count, scheduler, tx, subscription.clone());
        subscription.add(Box::new(engine.clone()));

        engine.start();

        // The pump slot is registered before the task exists, so a
        // subscription disposed in the meantime still cancels the pump
        let pump_slot = SingleAssignmentDisposable::new();
        subscription.add(Box::new(pump_slot.clone()));

        let pump = FenestraTask::spawn({
            let engine = engine.clone();
            move |cancel| async move {
                let mut source = self;
                loop {
                    match select(source.next(), cancel.cancelled()).await {
                        Either::Left((Some(StreamItem::Value(element)), _)) => {
                            engine.on_element(element);
                        }
                        Either::Left((Some(StreamItem::Error(err)), _)) => {
                            engine.on_error(err);
                            break;
                        }
                        Either::Left((None, _)) => {
                            engine.on_complete();
                            break;
                        }
                        Either::Right(((), _)) => break,
                    }
                }
            }
        });
        if pump_slot.set(Box::new(pump)).is_err() {
            warn!("buffer_time: pump slot assigned twice");
        }

        WindowStream::new(rx, subscription)
    }
}

struct TimedBufferState<T, Sch: Scheduler> {
    window: WindowAccumulator<T>,
    timer: SerialDisposable,
    downstream: Sender<StreamItem<Vec<T>>>,
    scheduler: Sch,
    timespan: Duration,
    count: usize,
    terminated: bool,
}

/// Count/time buffering engine.
///
/// All transitions run inside the single per-instance lock; the source pump
/// and every timer callback acquire it fresh. Downstream emission happens
/// under the lock through an unbounded channel, so windows are delivered in
/// exactly the order their rotations were decided.
struct TimedBufferEngine<T, Sch: Scheduler> {
    state: Arc<Mutex<TimedBufferState<T, Sch>>>,
    subscription: CompositeDisposable,
}

impl<T, Sch: Scheduler> Clone for TimedBufferEngine<T, Sch> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            subscription: self.subscription.clone(),
        }
    }
}

impl<T: Send + 'static, Sch: Scheduler> TimedBufferEngine<T, Sch> {
    fn new(
        timespan: Duration,
        count: usize,
        scheduler: Sch,
        downstream: Sender<StreamItem<Vec<T>>>,
        subscription: CompositeDisposable,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(TimedBufferState {
                window: WindowAccumulator::new(),
                timer: SerialDisposable::new(),
                downstream,
                scheduler,
                timespan,
                count,
                terminated: false,
            })),
            subscription,
        }
    }

    /// Arm the timer for the first window.
    fn start(&self) {
        let release = {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            self.schedule_locked(&mut state)
        };
        if release {
            self.subscription.dispose();
        }
    }

    fn on_element(&self, element: T) {
        let release = {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            state.window.append(element);
            if state.window.len() == state.count {
                // Count-triggered rotation: never empty by construction
                self.rotate_locked(&mut state)
            } else {
                false
            }
        };
        if release {
            self.subscription.dispose();
        }
    }

    /// Timer callback for the rotation that was live at schedule time.
    fn on_timer(&self, rotation: u64) {
        let release = {
            let mut state = self.state.lock();
            // Stale-timer guard: another trigger already rotated past us
            if state.terminated || state.window.rotation() != rotation {
                return;
            }
            // Timer rotation emits unconditionally, empty windows included
            self.rotate_locked(&mut state)
        };
        if release {
            self.subscription.dispose();
        }
    }

    fn on_complete(&self) {
        {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            // Final flush is unconditional: partial and empty windows are
            // both delivered before completion. No new window starts, so the
            // rotation id stays put
            let window = state.window.take();
            let _ = state.downstream.try_send(StreamItem::Value(window));
            self.terminate_locked(&mut state);
        }
        self.subscription.dispose();
    }

    fn on_error(&self, err: FenestraError) {
        {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            // Buffered-but-unflushed elements are dropped, not emitted
            state.window.discard();
            let _ = state.downstream.try_send(StreamItem::Error(err));
            self.terminate_locked(&mut state);
        }
        self.subscription.dispose();
    }

    /// Emit the current window and arm the timer for the next one.
    ///
    /// Returns `true` when the engine terminated during the rotation and the
    /// caller must release the subscription once the lock is dropped.
    fn rotate_locked(&self, state: &mut TimedBufferState<T, Sch>) -> bool {
        let window = state.window.rotate();
        if state.downstream.try_send(StreamItem::Value(window)).is_err() {
            warn!("buffer_time: downstream receiver dropped, releasing subscription");
            self.terminate_locked(state);
            return true;
        }
        self.schedule_locked(state)
    }

    /// Register the timer for the current rotation, superseding the previous
    /// handle. Registration is synchronous; the callback re-acquires the
    /// engine lock when it fires.
    fn schedule_locked(&self, state: &mut TimedBufferState<T, Sch>) -> bool {
        let rotation = state.window.rotation();
        let engine = self.clone();
        let action: ScheduledAction = Box::new(move || engine.on_timer(rotation));
        match state.scheduler.schedule_relative(state.timespan, action) {
            Ok(handle) => {
                state.timer.replace(Box::new(handle));
                false
            }
            Err(err) => {
                // Scheduling failure is fatal to the subscription, like any
                // upstream error
                state.window.discard();
                let _ = state.downstream.try_send(StreamItem::Error(err));
                self.terminate_locked(state);
                true
            }
        }
    }

    fn terminate_locked(&self, state: &mut TimedBufferState<T, Sch>) {
        state.terminated = true;
        state.timer.dispose();
        state.downstream.close();
    }
}

impl<T: Send + 'static, Sch: Scheduler> Disposable for TimedBufferEngine<T, Sch> {
    fn dispose(&self) {
        let mut state = self.state.lock();
        if state.terminated {
            return;
        }
        // Cancellation is a silent release: no flush, no synthesized error
        state.window.discard();
        self.terminate_locked(&mut state);
    }

    fn is_disposed(&self) -> bool {
        self.state.lock().terminated
    }
}
