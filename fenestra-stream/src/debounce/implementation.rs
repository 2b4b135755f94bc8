// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::StreamItem;
use fenestra_runtime::Scheduler;
use futures::Stream;
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// Extension trait providing the `debounce` operator for streams.
pub trait DebounceExt<T, Sch>: Stream<Item = StreamItem<T>> + Sized
where
    Sch: Scheduler,
{
    /// Debounces the stream by the specified duration.
    ///
    /// Emits the most recent value only once `duration` has elapsed with no
    /// newer value. See the [module documentation](crate::debounce) for the
    /// full semantics.
    fn debounce(self, duration: Duration, scheduler: Sch) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T, Sch> DebounceExt<T, Sch> for S
where
    S: Stream<Item = StreamItem<T>>,
    Sch: Scheduler,
{
    fn debounce(self, duration: Duration, scheduler: Sch) -> impl Stream<Item = StreamItem<T>> + Send
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        Box::pin(DebounceStream {
            stream: self,
            duration,
            scheduler,
            pending_value: None,
            sleep: None,
            stream_ended: false,
        })
    }
}

#[pin_project]
struct DebounceStream<S, T, Sch>
where
    S: Stream<Item = StreamItem<T>>,
    Sch: Scheduler,
{
    #[pin]
    stream: S,
    duration: Duration,
    scheduler: Sch,
    pending_value: Option<StreamItem<T>>,
    #[pin]
    sleep: Option<Sch::Sleep>,
    stream_ended: bool,
}

impl<S, T, Sch> Stream for DebounceStream<S, T, Sch>
where
    S: Stream<Item = StreamItem<T>>,
    Sch: Scheduler,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // Once the source has ended, flush the pending value and finish
            if *this.stream_ended {
                if let Some(item) = this.pending_value.take() {
                    return Poll::Ready(Some(item));
                }
                return Poll::Ready(None);
            }

            // A pending value is waiting out its quiescence timer
            if this.pending_value.is_some() {
                if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                    if sleep.poll(cx).is_ready() {
                        this.sleep.set(None);
                        let item = this.pending_value.take();
                        return Poll::Ready(item);
                    }
                }
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    // New value: restart the quiescence timer, keep only the
                    // newest pending value
                    this.sleep
                        .set(Some(this.scheduler.sleep_future(*this.duration)));
                    *this.pending_value = Some(StreamItem::Value(value));
                    continue;
                }
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    // Errors pass through immediately, discarding any pending value
                    *this.pending_value = None;
                    this.sleep.set(None);
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => {
                    *this.stream_ended = true;
                    continue;
                }
                Poll::Pending => {
                    return Poll::Pending;
                }
            }
        }
    }
}
