//! Animation primitives for Vitrine.
//!
//! This module provides the damped spring value model and the compositor
//! hint scheduler. Both are driver-independent: the spring is advanced by an
//! external per-frame ticker, and the hint is a pure derivation over the
//! caller's animation state.

mod hint;
mod spring;

pub use hint::{CompositorHint, HintProperty, HintScheduler, compositor_hint};
pub use spring::{DEFAULT_DAMPING, DEFAULT_STIFFNESS, Spring};
