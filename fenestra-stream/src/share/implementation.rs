// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::{FenestraSubject, FenestraTask, StreamItem, SubjectBoxStream, SubjectError};
use futures::future::{select, Either};
use futures::{Stream, StreamExt};

/// Boxed subscriber stream handed out by [`FenestraShared::subscribe`].
pub type SharedBoxStream<T> = SubjectBoxStream<T>;

/// A shared stream that broadcasts items from one upstream to multiple
/// subscribers.
///
/// Prefer [`ShareExt::share`] over constructing this directly. The upstream
/// is pumped by a background task whose lifetime is tied to this handle:
/// dropping the handle cancels the pump and completes all subscribers.
pub struct FenestraShared<T: Clone + Send + 'static> {
    subject: FenestraSubject<T>,
    pump: FenestraTask,
}

impl<T: Clone + Send + 'static> FenestraShared<T> {
    /// Start consuming `source` and broadcasting its events.
    pub fn new<S>(source: S) -> Self
    where
        S: Stream<Item = StreamItem<T>> + Send + Unpin + 'static,
    {
        let subject = FenestraSubject::new();
        let subject_clone = subject.clone();

        let task = FenestraTask::spawn(|cancel| async move {
            let mut stream = source;
            while let Either::Left((stream_item, _)) =
                select(stream.next(), cancel.cancelled()).await
            {
                match stream_item {
                    Some(StreamItem::Value(v)) => {
                        if subject_clone.next(v).is_err() {
                            break;
                        }
                    }
                    Some(StreamItem::Error(e)) => {
                        let _ = subject_clone.error(e);
                        break;
                    }
                    None => break,
                }
            }
            subject_clone.close();
        });

        Self {
            subject,
            pump: task,
        }
    }

    /// Stop pumping the upstream and complete all subscribers.
    ///
    /// Equivalent to dropping the handle, but callable through a shared
    /// reference; the debounce-buffer composition uses this to tie the
    /// multicast's lifetime to a composite subscription. Idempotent.
    pub fn close(&self) {
        self.pump.cancel();
        self.subject.close();
    }

    /// Subscribe to this shared stream, creating a new independent observer.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` once the upstream has terminated.
    pub fn subscribe(&self) -> Result<SharedBoxStream<T>, SubjectError> {
        self.subject.subscribe()
    }

    /// Returns `true` once the upstream has terminated.
    pub fn is_closed(&self) -> bool {
        self.subject.is_closed()
    }

    /// Current number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl<T: Clone + Send + 'static> Drop for FenestraShared<T> {
    fn drop(&mut self) {
        self.subject.close();
    }
}

/// Extension trait for sharing a stream among multiple subscribers.
pub trait ShareExt<T: Clone + Send + 'static>: Stream<Item = StreamItem<T>> {
    /// Shares this stream among multiple subscribers.
    ///
    /// See the [module-level documentation](crate::share) for the multicast
    /// guarantee.
    fn share(self) -> FenestraShared<T>
    where
        Self: Send + Unpin + 'static;
}

impl<S, T> ShareExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone + Send + 'static,
{
    fn share(self) -> FenestraShared<T>
    where
        Self: Send + Unpin + 'static,
    {
        FenestraShared::new(self)
    }
}
