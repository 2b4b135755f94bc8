// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::{FenestraError, StreamItem};
use tokio::sync::mpsc::{self, error::SendError};
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Stream side of a [`test_channel`].
pub type TestStream<T> = UnboundedReceiverStream<StreamItem<T>>;

/// Push side of a [`test_channel`].
///
/// Values are wrapped in `StreamItem::Value`; [`TestSender::error`] injects
/// an in-band error; [`TestSender::close`] (or dropping the sender)
/// completes the stream.
pub struct TestSender<T> {
    tx: mpsc::UnboundedSender<StreamItem<T>>,
}

impl<T> TestSender<T> {
    /// Push a value into the stream.
    ///
    /// # Errors
    ///
    /// Fails once the receiving side has been dropped.
    pub fn send(&self, value: T) -> Result<(), SendError<StreamItem<T>>> {
        self.tx.send(StreamItem::Value(value))
    }

    /// Push an in-band error into the stream.
    ///
    /// # Errors
    ///
    /// Fails once the receiving side has been dropped.
    pub fn error(&self, err: FenestraError) -> Result<(), SendError<StreamItem<T>>> {
        self.tx.send(StreamItem::Error(err))
    }

    /// Complete the stream: subscribers observe end-of-stream after draining.
    pub fn close(self) {
        drop(self);
    }
}

/// Unbounded push channel for driving operators in tests.
pub fn test_channel<T>() -> (TestSender<T>, TestStream<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (TestSender { tx }, UnboundedReceiverStream::new(rx))
}
