// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable-resource handles used to release subscriptions and timers.
//!
//! Three composable holders cover the ownership patterns of the windowing
//! engines:
//!
//! - [`SerialDisposable`] holds at most one live resource, releasing the
//!   previous one when replaced. The timed buffer engine keeps its single
//!   outstanding timer in one of these.
//! - [`SingleAssignmentDisposable`] may be assigned exactly once; assignment
//!   after disposal releases the incoming resource immediately.
//! - [`CompositeDisposable`] owns a set of children and releases all of them
//!   exactly once. One composite covers the source subscription, the boundary
//!   subscription and any outstanding timer of an engine instance.
//!
//! All holders are cloneable handles to shared state; disposal is idempotent
//! and safe from any thread. Child resources are always released outside the
//! holder's own lock.

use crate::cancellation_token::CancellationToken;
use crate::error::{FenestraError, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// An idempotent, releasable resource handle.
pub trait Disposable: Send + Sync {
    /// Release the underlying resource. Safe to call multiple times and from
    /// any context; every call after the first is a no-op.
    fn dispose(&self);

    /// Returns `true` once `dispose` has been called.
    fn is_disposed(&self) -> bool;
}

/// Boxed disposable, the unit of ownership for the composite holders.
pub type BoxDisposable = Box<dyn Disposable>;

impl Disposable for CancellationToken {
    fn dispose(&self) {
        self.cancel();
    }

    fn is_disposed(&self) -> bool {
        self.is_cancelled()
    }
}

// ==================== SerialDisposable ====================

struct SerialState {
    current: Option<BoxDisposable>,
    disposed: bool,
}

/// Holds at most one live resource, releasing the previous one when replaced.
///
/// Once disposed, any resource assigned afterwards is released immediately.
#[derive(Clone)]
pub struct SerialDisposable {
    inner: Arc<Mutex<SerialState>>,
}

impl SerialDisposable {
    /// Create an empty, not-yet-disposed holder.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SerialState {
                current: None,
                disposed: false,
            })),
        }
    }

    /// Install `next` as the live resource.
    ///
    /// The previously held resource, if any, is released. If the holder is
    /// already disposed, `next` is released instead of being installed.
    pub fn replace(&self, next: BoxDisposable) {
        let superseded = {
            let mut state = self.inner.lock();
            if state.disposed {
                Some(next)
            } else {
                state.current.replace(next)
            }
        };
        if let Some(old) = superseded {
            old.dispose();
        }
    }
}

impl Default for SerialDisposable {
    fn default() -> Self {
        Self::new()
    }
}

impl Disposable for SerialDisposable {
    fn dispose(&self) {
        let current = {
            let mut state = self.inner.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.current.take()
        };
        if let Some(resource) = current {
            resource.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }
}

// ==================== SingleAssignmentDisposable ====================

struct SingleAssignmentState {
    resource: Option<BoxDisposable>,
    assigned: bool,
    disposed: bool,
}

/// A holder that may be assigned exactly once.
///
/// If disposed before assignment, the later assignment is released
/// immediately. A second assignment is refused.
#[derive(Clone)]
pub struct SingleAssignmentDisposable {
    inner: Arc<Mutex<SingleAssignmentState>>,
}

impl SingleAssignmentDisposable {
    /// Create an empty, not-yet-assigned holder.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SingleAssignmentState {
                resource: None,
                assigned: false,
                disposed: false,
            })),
        }
    }

    /// Assign the held resource.
    ///
    /// # Errors
    ///
    /// Returns `FenestraError::InvalidState` if a resource was already
    /// assigned. When the holder was disposed before assignment, `resource`
    /// is released and the call succeeds.
    pub fn set(&self, resource: BoxDisposable) -> Result<()> {
        let dispose_now = {
            let mut state = self.inner.lock();
            if state.assigned {
                return Err(FenestraError::invalid_state(
                    "SingleAssignmentDisposable already assigned",
                ));
            }
            state.assigned = true;
            if state.disposed {
                Some(resource)
            } else {
                state.resource = Some(resource);
                None
            }
        };
        if let Some(resource) = dispose_now {
            resource.dispose();
        }
        Ok(())
    }
}

impl Default for SingleAssignmentDisposable {
    fn default() -> Self {
        Self::new()
    }
}

impl Disposable for SingleAssignmentDisposable {
    fn dispose(&self) {
        let resource = {
            let mut state = self.inner.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.resource.take()
        };
        if let Some(resource) = resource {
            resource.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }
}

// ==================== CompositeDisposable ====================

struct CompositeState {
    children: Vec<BoxDisposable>,
    disposed: bool,
}

/// Joint owner of several resources, releasing all of them exactly once.
///
/// Children added after disposal are released immediately, so a composite can
/// be handed out before all of its resources exist.
#[derive(Clone)]
pub struct CompositeDisposable {
    inner: Arc<Mutex<CompositeState>>,
}

impl CompositeDisposable {
    /// Create an empty composite.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CompositeState {
                children: Vec::new(),
                disposed: false,
            })),
        }
    }

    /// Add a child resource, taking ownership of it.
    pub fn add(&self, child: BoxDisposable) {
        let dispose_now = {
            let mut state = self.inner.lock();
            if state.disposed {
                Some(child)
            } else {
                state.children.push(child);
                None
            }
        };
        if let Some(child) = dispose_now {
            child.dispose();
        }
    }

    /// Number of currently owned children.
    pub fn len(&self) -> usize {
        self.inner.lock().children.len()
    }

    /// Returns `true` if no children are currently owned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CompositeDisposable {
    fn default() -> Self {
        Self::new()
    }
}

impl Disposable for CompositeDisposable {
    fn dispose(&self) {
        let children = {
            let mut state = self.inner.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            std::mem::take(&mut state.children)
        };
        for child in children {
            child.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }
}
