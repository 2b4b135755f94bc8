// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronization primitive guarding all per-instance engine and subject state.
//!
//! Re-exported so every crate in the workspace locks the same way. The lock is
//! never held across an await point; handlers acquire it, transition, and
//! release it within a single synchronous step.

pub use parking_lot::Mutex;
