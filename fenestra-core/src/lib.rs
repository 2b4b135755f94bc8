// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod disposable;
pub mod error;
pub mod fenestra_mutex;
pub mod fenestra_subject;
pub mod fenestra_task;
pub mod stream_item;
pub mod subject_error;

pub use self::cancellation_token::CancellationToken;
pub use self::disposable::{
    BoxDisposable, CompositeDisposable, Disposable, SerialDisposable, SingleAssignmentDisposable,
};
pub use self::error::{FenestraError, Result};
pub use self::fenestra_subject::{FenestraSubject, SubjectBoxStream};
pub use self::fenestra_task::FenestraTask;
pub use self::stream_item::StreamItem;
pub use self::subject_error::SubjectError;
