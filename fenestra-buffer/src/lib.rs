// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
pub mod buffer_debounce;
pub mod buffer_time;
pub mod buffer_when;
mod logging;
pub mod prelude;
mod window;
pub mod window_stream;

pub use self::buffer_debounce::BufferDebounceExt;
pub use self::buffer_time::BufferTimeExt;
pub use self::buffer_when::BufferWhenExt;
pub use self::window_stream::WindowStream;
