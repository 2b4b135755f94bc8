// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the buffering operator traits.
//!
//! ```ignore
//! use fenestra_buffer::prelude::*;
//!
//! let windows = source.buffer_time(timespan, count, scheduler);
//! let windows = source.buffer_when(boundary);
//! let windows = source.buffer_debounce(quiescence, scheduler);
//! ```

pub use crate::buffer_debounce::BufferDebounceExt;
pub use crate::buffer_time::BufferTimeExt;
pub use crate::buffer_when::BufferWhenExt;
pub use crate::window_stream::WindowStream;
