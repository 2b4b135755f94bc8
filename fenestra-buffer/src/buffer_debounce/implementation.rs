// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::buffer_when::BufferWhenExt;
use crate::window_stream::WindowStream;
use fenestra_core::{Disposable, StreamItem};
use fenestra_runtime::Scheduler;
use fenestra_stream::{DebounceExt, FenestraShared, ShareExt};
use futures::Stream;
use std::time::Duration;

/// Extension trait providing the `buffer_debounce` operator.
pub trait BufferDebounceExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Buffers elements into windows closed by quiescence of the source
    /// itself: a window is emitted once no element has arrived for
    /// `quiescence`.
    ///
    /// See the [module documentation](crate::buffer_debounce) for how the
    /// boundary is derived from a shared copy of the source.
    fn buffer_debounce<Sch>(self, quiescence: Duration, scheduler: Sch) -> WindowStream<T>
    where
        Self: Send + Unpin + 'static,
        T: Clone + Send + 'static,
        Sch: Scheduler;
}

impl<S, T> BufferDebounceExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn buffer_debounce<Sch>(self, quiescence: Duration, scheduler: Sch) -> WindowStream<T>
    where
        Self: Send + Unpin + 'static,
        T: Clone + Send + 'static,
        Sch: Scheduler,
    {
        // Construct the shared sequence once and hand the same handle to
        // both observers; the raw source is never subscribed twice
        let shared = self.share();
        let data = match shared.subscribe() {
            Ok(stream) => stream,
            Err(err) => return WindowStream::failed(err.into()),
        };
        let boundary = match shared.subscribe() {
            Ok(stream) => stream,
            Err(err) => return WindowStream::failed(err.into()),
        };
        let boundary = Box::pin(boundary.debounce(quiescence, scheduler));

        let windows = data.buffer_when(boundary);
        // The multicast stays alive exactly as long as the subscription does
        windows.attach(Box::new(SharedGuard { shared }));
        windows
    }
}

/// Ties a shared source's lifetime to the window subscription that uses it.
struct SharedGuard<T: Clone + Send + 'static> {
    shared: FenestraShared<T>,
}

impl<T: Clone + Send + 'static> Disposable for SharedGuard<T> {
    fn dispose(&self) {
        self.shared.close();
    }

    fn is_disposed(&self) -> bool {
        self.shared.is_closed()
    }
}
