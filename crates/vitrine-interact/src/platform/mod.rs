//! Platform environment probes.
//!
//! Read-only signals sampled from the host system: the color scheme
//! preference behind the theme store's fallback rule, and the reduced-motion
//! accessibility preference gating animation.

mod color_scheme;
mod reduced_motion;

pub use color_scheme::{ColorScheme, SystemAppearance};
pub use reduced_motion::ReducedMotion;
