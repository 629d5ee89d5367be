//! Hover group coordination for list-like UI groups.
//!
//! This module provides [`HoverGroup`], a non-visual coordinator that tracks
//! which member of a rendered collection is currently hovered and derives the
//! matching de-emphasis ("dimmed") state for its siblings.
//!
//! # Example
//!
//! ```
//! use vitrine_interact::hover::HoverGroup;
//!
//! let mut group = HoverGroup::new();
//!
//! // Pointer enters item 1
//! group.set_active(1);
//! assert!(group.is_active(1));
//! assert!(group.is_dimmed(0));
//! assert!(group.is_dimmed(2));
//!
//! // Pointer leaves the collection
//! group.clear_active();
//! assert!(!group.is_dimmed(0));
//! ```

use vitrine_core::Signal;

/// The visual state of one group member.
///
/// Consumers are polymorphic over "anything that can render given
/// (active, dimmed)"; this is the per-item snapshot they render from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverItemState {
    /// Whether this item is the group's active (hovered) member.
    pub active: bool,
    /// Whether this item should be visually de-emphasized because a
    /// different member is active.
    pub dimmed: bool,
}

/// A non-visual coordinator for single-owner hover state.
///
/// At most one index is active group-wide. Whenever any item is active, every
/// other item reports `dimmed`; when nothing is active, nothing is dimmed.
///
/// One group is created per rendered collection and dropped with it. Indices
/// are caller-supplied and not bounds-checked: the group never iterates the
/// underlying collection, so out-of-range usage is the caller's
/// responsibility.
///
/// # Change Notification
///
/// [`active_changed`](Self::active_changed) is emitted with the new active
/// index whenever the state actually changes; setting the already-active
/// index again does not emit.
#[derive(Debug)]
pub struct HoverGroup {
    /// The currently active index, if any.
    active: Option<usize>,

    /// Signal emitted when the active index changes.
    /// Parameter is the new active index (`None` after `clear_active`).
    pub active_changed: Signal<Option<usize>>,
}

impl HoverGroup {
    /// Create a new group with nothing active.
    pub fn new() -> Self {
        Self {
            active: None,
            active_changed: Signal::new(),
        }
    }

    /// Get the currently active index.
    ///
    /// Returns `None` if nothing is active.
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Mark `index` active, deactivating any previously active index.
    ///
    /// Typically wired to a member's pointer-enter event.
    pub fn set_active(&mut self, index: usize) {
        if self.active == Some(index) {
            return;
        }
        self.active = Some(index);
        self.active_changed.emit(self.active);
    }

    /// Clear the active index.
    ///
    /// Typically wired to the member's (or collection's) pointer-leave event.
    pub fn clear_active(&mut self) {
        if self.active.is_none() {
            return;
        }
        self.active = None;
        self.active_changed.emit(None);
    }

    /// Whether `index` is the currently active member.
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Whether `index` should be dimmed.
    ///
    /// True iff an active index exists and it differs from `index`.
    #[inline]
    pub fn is_dimmed(&self, index: usize) -> bool {
        matches!(self.active, Some(active) if active != index)
    }

    /// Per-item snapshot of the two derived flags.
    pub fn item_state(&self, index: usize) -> HoverItemState {
        HoverItemState {
            active: self.is_active(index),
            dimmed: self.is_dimmed(index),
        }
    }
}

impl Default for HoverGroup {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(HoverGroup: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_new_group_has_nothing_active() {
        let group = HoverGroup::new();
        assert_eq!(group.active(), None);
        for i in 0..4 {
            assert!(!group.is_active(i));
            assert!(!group.is_dimmed(i));
        }
    }

    #[test]
    fn test_single_owner_semantics() {
        let mut group = HoverGroup::new();

        group.set_active(0);
        assert!(group.is_active(0));

        // Activating another index steals ownership
        group.set_active(2);
        assert!(!group.is_active(0));
        assert!(group.is_active(2));

        // At most one index is ever active
        let active_count = (0..4).filter(|&i| group.is_active(i)).count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_dimming_follows_active() {
        let mut group = HoverGroup::new();

        group.set_active(1);
        assert!(group.is_dimmed(0));
        assert!(!group.is_dimmed(1));
        assert!(group.is_dimmed(2));

        group.clear_active();
        assert!(!group.is_dimmed(0));
        assert!(!group.is_dimmed(1));
        assert!(!group.is_dimmed(2));
    }

    #[test]
    fn test_item_state_snapshot() {
        let mut group = HoverGroup::new();
        group.set_active(1);

        assert_eq!(
            group.item_state(1),
            HoverItemState {
                active: true,
                dimmed: false
            }
        );
        assert_eq!(
            group.item_state(0),
            HoverItemState {
                active: false,
                dimmed: true
            }
        );
    }

    #[test]
    fn test_change_notification() {
        let mut group = HoverGroup::new();
        let emissions = Arc::new(AtomicUsize::new(0));

        let emissions_clone = emissions.clone();
        group.active_changed.connect(move |_| {
            emissions_clone.fetch_add(1, Ordering::SeqCst);
        });

        group.set_active(0);
        group.set_active(0); // no change, no emit
        group.set_active(1);
        group.clear_active();
        group.clear_active(); // no change, no emit

        assert_eq!(emissions.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_arbitrary_sequences_hold_invariant() {
        let mut group = HoverGroup::new();

        let ops: [(bool, usize); 8] = [
            (true, 3),
            (true, 0),
            (false, 0),
            (true, 7),
            (true, 7),
            (false, 0),
            (false, 0),
            (true, 2),
        ];

        for (set, index) in ops {
            if set {
                group.set_active(index);
            } else {
                group.clear_active();
            }

            let active_count = (0..10).filter(|&i| group.is_active(i)).count();
            assert!(active_count <= 1);
            for i in 0..10 {
                assert_eq!(
                    group.is_dimmed(i),
                    group.active().is_some_and(|a| a != i)
                );
            }
        }
    }
}
