//! Vitrine Interact - client-side interaction primitives.
//!
//! These are the stateful building blocks a presentation layer wires into
//! style and attribute values: hover-group coordination, spring-damped
//! pointer tilt, compositor hint scheduling, persisted theme state, and
//! match highlighting. No primitive depends on rendering; each exposes a
//! small value-level contract and, where state changes over time, a
//! [`Signal`](vitrine_core::Signal) to subscribe to.
//!
//! # Example
//!
//! ```
//! use vitrine_interact::prelude::*;
//!
//! // One hover group per rendered collection
//! let mut group = HoverGroup::new();
//! group.set_active(0);
//! assert!(group.is_dimmed(1));
//!
//! // Highlight search matches in an item label
//! let segments = highlight("Interactive Design", "design");
//! assert!(segments.iter().any(|s| s.is_match));
//! ```

pub mod animation;
pub mod hover;
pub mod platform;
pub mod prelude;
pub mod text;
pub mod theme;
pub mod tilt;

// Re-export the core geometry types used in the pointer contracts.
pub use vitrine_core::{Point, Rect, Size};
