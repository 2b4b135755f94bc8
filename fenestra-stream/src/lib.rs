// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
pub mod debounce;
pub mod prelude;
pub mod share;

pub use self::debounce::DebounceExt;
pub use self::share::{FenestraShared, ShareExt, SharedBoxStream};
