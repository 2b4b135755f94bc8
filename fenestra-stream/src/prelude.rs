// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the stream operator traits.
//!
//! ```ignore
//! use fenestra_stream::prelude::*;
//!
//! let shared = source.share();
//! let boundary = shared.subscribe()?.debounce(quiescence, scheduler);
//! ```

pub use crate::debounce::DebounceExt;
pub use crate::share::{FenestraShared, ShareExt, SharedBoxStream};
