//! Compositor hint scheduling.
//!
//! Renderers can pre-optimize for properties that are about to change, but
//! the hint has a persistent compositor-memory cost while it is advertised.
//! This module derives the hint to apply at any instant: the named properties
//! while an animation is actually in flight, and the neutral value the rest
//! of the time or whenever the user has requested reduced motion.
//!
//! # Example
//!
//! ```
//! use vitrine_interact::animation::{compositor_hint, CompositorHint, HintProperty};
//!
//! let props = [HintProperty::Transform, HintProperty::Opacity];
//!
//! // Idle: no hint, no compositor cost
//! assert_eq!(compositor_hint(&props, false, false), CompositorHint::Auto);
//!
//! // Animating: advertise the upcoming changes
//! let hint = compositor_hint(&props, true, false);
//! assert_eq!(hint.to_string(), "transform, opacity");
//! ```

use std::fmt;

/// A visual property a renderer can pre-optimize for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintProperty {
    /// Geometric transforms (translation, rotation, scale).
    Transform,
    /// Opacity fades.
    Opacity,
    /// Filter effects (blur, saturation).
    Filter,
}

impl HintProperty {
    /// The property's style-sheet spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Opacity => "opacity",
            Self::Filter => "filter",
        }
    }
}

impl fmt::Display for HintProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The hint to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositorHint {
    /// Neutral value: no pre-optimization requested.
    Auto,
    /// Advertise that the named properties are about to change.
    ///
    /// De-duplicated, in first-occurrence order.
    Properties(Vec<HintProperty>),
}

impl fmt::Display for CompositorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Properties(props) => {
                for (i, prop) in props.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(prop.name())?;
                }
                Ok(())
            }
        }
    }
}

/// Derive the hint for a set of upcoming property changes.
///
/// Returns the de-duplicated, order-stable property list when `animating` is
/// true and `reduced_motion` is false; otherwise [`CompositorHint::Auto`].
/// Recompute whenever any input changes — the function is pure and has no
/// side effects beyond the returned value.
pub fn compositor_hint(
    properties: &[HintProperty],
    animating: bool,
    reduced_motion: bool,
) -> CompositorHint {
    if !animating || reduced_motion {
        return CompositorHint::Auto;
    }

    let mut deduped = Vec::with_capacity(properties.len());
    for &prop in properties {
        if !deduped.contains(&prop) {
            deduped.push(prop);
        }
    }
    CompositorHint::Properties(deduped)
}

/// Holds the three hint inputs alongside a widget.
///
/// A convenience over [`compositor_hint`] for callers that keep the inputs
/// as state and re-resolve when one of them changes: the animated properties
/// rarely change, `animating` flips with the animation lifecycle, and
/// `reduced_motion` is sampled from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintScheduler {
    properties: Vec<HintProperty>,
    animating: bool,
    reduced_motion: bool,
}

impl HintScheduler {
    /// Create a scheduler for the given properties, idle, with motion
    /// preference taken from the caller's environment sample.
    pub fn new(properties: impl Into<Vec<HintProperty>>, reduced_motion: bool) -> Self {
        Self {
            properties: properties.into(),
            animating: false,
            reduced_motion,
        }
    }

    /// The properties this scheduler advertises while animating.
    pub fn properties(&self) -> &[HintProperty] {
        &self.properties
    }

    /// Replace the advertised property set.
    pub fn set_properties(&mut self, properties: impl Into<Vec<HintProperty>>) {
        self.properties = properties.into();
    }

    /// Whether the animation window is currently open.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Open or close the animation window.
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Update the reduced-motion flag.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    /// The hint to apply right now.
    pub fn resolve(&self) -> CompositorHint {
        compositor_hint(&self.properties, self.animating, self.reduced_motion)
    }
}
