//! Core systems for Vitrine.
//!
//! This crate provides the foundational components shared by the Vitrine
//! interaction crates:
//!
//! - **Signal/Slot System**: Type-safe change notification between
//!   interaction primitives and their consumers
//! - **Geometry**: Renderer-independent point/size/rect value types
//!
//! # Signal/Slot Example
//!
//! ```
//! use vitrine_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod signal;

pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
