// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared window accumulator used by every buffering engine.
//!
//! Holds the single pending window and the rotation counter that tags
//! deferred triggers. The protocol around it matters more than the code in
//! it: engines always mutate, then check, then emit, all inside their own
//! lock, and any deferred trigger compares its captured rotation id against
//! the live one before acting.

/// The single pending window of one engine instance, plus rotation
/// bookkeeping.
pub(crate) struct WindowAccumulator<T> {
    items: Vec<T>,
    rotation: u64,
}

impl<T> WindowAccumulator<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            rotation: 0,
        }
    }

    /// Append an element in arrival order.
    pub(crate) fn append(&mut self, element: T) {
        self.items.push(element);
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identifier of the window currently being accumulated.
    ///
    /// Changes exactly once per [`rotate`](Self::rotate); a deferred trigger
    /// scheduled for an older id must no-op.
    pub(crate) fn rotation(&self) -> u64 {
        self.rotation
    }

    /// Close the current window: return its content (possibly empty), reset
    /// to empty, and bump the rotation id.
    pub(crate) fn rotate(&mut self) -> Vec<T> {
        self.rotation += 1;
        std::mem::take(&mut self.items)
    }

    /// Remove and return the pending content without opening a new window:
    /// the rotation id stays put. Used for terminal flushes, where no
    /// further window may start.
    pub(crate) fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    /// Drop the pending content without emitting and without bumping the
    /// rotation id. Used on error paths.
    pub(crate) fn discard(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::WindowAccumulator;

    #[test]
    fn rotate_returns_content_in_arrival_order_and_resets() {
        let mut acc = WindowAccumulator::new();
        acc.append(1);
        acc.append(2);
        acc.append(3);

        assert_eq!(acc.rotation(), 0);
        assert_eq!(acc.rotate(), vec![1, 2, 3]);
        assert_eq!(acc.rotation(), 1);
        assert!(acc.is_empty());
    }

    #[test]
    fn rotate_on_empty_yields_empty_window() {
        let mut acc = WindowAccumulator::<i32>::new();
        assert_eq!(acc.rotate(), Vec::<i32>::new());
        assert_eq!(acc.rotation(), 1);
    }

    #[test]
    fn take_returns_content_without_bumping_rotation() {
        let mut acc = WindowAccumulator::new();
        acc.append(1);
        acc.append(2);

        assert_eq!(acc.take(), vec![1, 2]);
        assert!(acc.is_empty());
        assert_eq!(acc.rotation(), 0);
    }

    #[test]
    fn discard_clears_without_bumping_rotation() {
        let mut acc = WindowAccumulator::new();
        acc.append("x");
        acc.discard();

        assert!(acc.is_empty());
        assert_eq!(acc.rotation(), 0);
    }

    #[test]
    fn len_tracks_pending_content() {
        let mut acc = WindowAccumulator::new();
        assert_eq!(acc.len(), 0);
        acc.append(10);
        acc.append(20);
        assert_eq!(acc.len(), 2);
    }
}
