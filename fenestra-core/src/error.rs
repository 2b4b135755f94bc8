// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the fenestra windowing library.
//!
//! Every failure in a fenestra pipeline is fatal to the subscription that
//! observed it: the error travels downstream in-band as
//! [`StreamItem::Error`](crate::StreamItem::Error) exactly once, after which
//! the subscription is disposed. There is no retry and no operator-local
//! suppression.

use crate::subject_error::SubjectError;

/// Root error type for all fenestra operations.
#[derive(Debug, thiserror::Error)]
pub enum FenestraError {
    /// General stream processing failure.
    ///
    /// Used for failures that don't fit a more specific category, and as the
    /// clonable fallback representation of wrapped user errors.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// The scheduling collaborator failed to register a timer.
    ///
    /// Treated like any other upstream failure: buffered elements are
    /// discarded and the error is forwarded downstream.
    #[error("Failed to schedule timer: {context}")]
    ScheduleError {
        /// Description of the registration failure
        context: String,
    },

    /// Operation attempted in a state that does not allow it.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state
        message: String,
    },

    /// A subject refused the operation.
    #[error("Subject error: {0}")]
    Subject(#[from] SubjectError),

    /// Custom error from user code.
    ///
    /// Wraps errors produced by user-provided sources and callbacks so they
    /// can be propagated through the fenestra error system.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FenestraError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a timer registration error with the given context.
    pub fn schedule_error(context: impl Into<String>) -> Self {
        Self::ScheduleError {
            context: context.into(),
        }
    }

    /// Create an invalid state error with the given message.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

impl Clone for FenestraError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            Self::ScheduleError { context } => Self::ScheduleError {
                context: context.clone(),
            },
            Self::InvalidState { message } => Self::InvalidState {
                message: message.clone(),
            },
            Self::Subject(e) => Self::Subject(e.clone()),
            // The boxed error is not clonable, so fall back to its rendering
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}

/// Specialized Result type for fenestra operations.
pub type Result<T> = std::result::Result<T, FenestraError>;
