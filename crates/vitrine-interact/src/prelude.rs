//! Prelude module for Vitrine Interact.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```
//! use vitrine_interact::prelude::*;
//! ```
//!
//! This provides access to:
//! - Hover coordination (`HoverGroup`, `HoverItemState`)
//! - Tilt and animation (`TiltModel`, `Spring`, `HintScheduler`)
//! - Theme state (`ThemeStore`, `ThemePreference`)
//! - Match highlighting (`Highlighter`, `highlight`)
//! - Platform probes (`SystemAppearance`, `ReducedMotion`)
//! - Geometry types (`Point`, `Size`, `Rect`)

// ============================================================================
// Hover Coordination
// ============================================================================

pub use crate::hover::{HoverGroup, HoverItemState};

// ============================================================================
// Tilt and Animation
// ============================================================================

pub use crate::animation::{CompositorHint, HintProperty, HintScheduler, Spring, compositor_hint};
pub use crate::tilt::{TiltModel, TiltRotation};

// ============================================================================
// Theme State
// ============================================================================

pub use crate::theme::{ThemePreference, ThemeStore};

// ============================================================================
// Match Highlighting
// ============================================================================

pub use crate::text::{Highlighter, MatchSegment, highlight};

// ============================================================================
// Platform Probes
// ============================================================================

pub use crate::platform::{ColorScheme, ReducedMotion, SystemAppearance};

// ============================================================================
// Geometry and Signals
// ============================================================================

pub use vitrine_core::{Point, Rect, Signal, Size};
