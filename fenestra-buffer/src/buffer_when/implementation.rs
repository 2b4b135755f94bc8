// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::warn;
use crate::window::WindowAccumulator;
use crate::window_stream::WindowStream;
use async_channel::Sender;
use fenestra_core::fenestra_mutex::Mutex;
use fenestra_core::{
    CompositeDisposable, Disposable, FenestraError, FenestraTask, SingleAssignmentDisposable,
    StreamItem,
};
use futures::future::{select, Either};
use futures::{Stream, StreamExt};
use std::sync::Arc;

/// Extension trait providing the `buffer_when` operator.
pub trait BufferWhenExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Buffers elements into windows closed by emissions of `boundary`.
    ///
    /// See the [module documentation](crate::buffer_when) for the full
    /// semantics, including the deliberate suppression of empty windows on
    /// boundary ticks.
    fn buffer_when<B, Marker>(self, boundary: B) -> WindowStream<T>
    where
        Self: Send + Unpin + 'static,
        T: Send + 'static,
        B: Stream<Item = StreamItem<Marker>> + Send + Unpin + 'static,
        Marker: Send + 'static;
}

impl<S, T> BufferWhenExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn buffer_when<B, Marker>(self, boundary: B) -> WindowStream<T>
    where
        Self: Send + Unpin + 'static,
        T: Send + 'static,
        B: Stream<Item = StreamItem<Marker>> + Send + Unpin + 'static,
        Marker: Send + 'static,
    {
        let (tx, rx) = async_channel::unbounded();
        let subscription = CompositeDisposable::new();
        let engine = BoundaryBufferEngine::new(tx, subscription.clone());
        subscription.add(Box::new(engine.clone()));

        // Both pumps are owned by the same composite: whichever side
        // terminates first releases the other as part of the same disposal
        let source_slot = SingleAssignmentDisposable::new();
        subscription.add(Box::new(source_slot.clone()));
        let boundary_slot = SingleAssignmentDisposable::new();
        subscription.add(Box::new(boundary_slot.clone()));

        let source_pump = FenestraTask::spawn({
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
        if source_slot.set(Box::new(source_pump)).is_err() {
            warn!("buffer_when: source pump slot assigned twice");
        }

        let boundary_pump = FenestraTask::spawn({
            let engine = engine.clone();
            move |cancel| async move {
                let mut boundary = boundary;
                loop {
                    match select(boundary.next(), cancel.cancelled()).await {
                        Either::Left((Some(StreamItem::Value(_)), _)) => {
                            engine.on_boundary();
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
        if boundary_slot.set(Box::new(boundary_pump)).is_err() {
            warn!("buffer_when: boundary pump slot assigned twice");
        }

        WindowStream::new(rx, subscription)
    }
}

struct BoundaryBufferState<T> {
    window: WindowAccumulator<T>,
    downstream: Sender<StreamItem<Vec<T>>>,
    terminated: bool,
}

/// Boundary-driven buffering engine.
///
/// The source pump and the boundary pump feed the same synchronized
/// handlers; only one logical transition is in flight at a time regardless
/// of which stream delivered the event. Whichever side terminates first
/// wins: the other subscription is released by the shared composite.
struct BoundaryBufferEngine<T> {
    state: Arc<Mutex<BoundaryBufferState<T>>>,
    subscription: CompositeDisposable,
}

impl<T> Clone for BoundaryBufferEngine<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            subscription: self.subscription.clone(),
        }
    }
}

impl<T: Send + 'static> BoundaryBufferEngine<T> {
    fn new(downstream: Sender<StreamItem<Vec<T>>>, subscription: CompositeDisposable) -> Self {
        Self {
            state: Arc::new(Mutex::new(BoundaryBufferState {
                window: WindowAccumulator::new(),
                downstream,
                terminated: false,
            })),
            subscription,
        }
    }

    /// Source element: accumulate only. Rotation is driven entirely by the
    /// boundary.
    fn on_element(&self, element: T) {
        let mut state = self.state.lock();
        if state.terminated {
            return;
        }
        state.window.append(element);
    }

    /// Boundary tick: rotate, emitting only when the window is non-empty.
    fn on_boundary(&self) {
        let release = {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            if state.window.is_empty() {
                return;
            }
            let window = state.window.rotate();
            if state.downstream.try_send(StreamItem::Value(window)).is_err() {
                warn!("buffer_when: downstream receiver dropped, releasing subscription");
                self.terminate_locked(&mut state);
                true
            } else {
                false
            }
        };
        if release {
            self.subscription.dispose();
        }
    }

    /// Completion of either the source or the boundary: flush the pending
    /// window only when non-empty, then complete and release both
    /// subscriptions.
    fn on_complete(&self) {
        {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            if !state.window.is_empty() {
                let window = state.window.take();
                let _ = state.downstream.try_send(StreamItem::Value(window));
            }
            self.terminate_locked(&mut state);
        }
        self.subscription.dispose();
    }

    /// Failure of either the source or the boundary: discard and forward.
    fn on_error(&self, err: FenestraError) {
        {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            state.window.discard();
            let _ = state.downstream.try_send(StreamItem::Error(err));
            self.terminate_locked(&mut state);
        }
        self.subscription.dispose();
    }

    fn terminate_locked(&self, state: &mut BoundaryBufferState<T>) {
        state.terminated = true;
        state.downstream.close();
    }
}

impl<T: Send + 'static> Disposable for BoundaryBufferEngine<T> {
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
