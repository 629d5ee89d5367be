//! Pointer-driven 3D tilt effect.
//!
//! [`TiltModel`] maps the pointer's position within an element's bounds to a
//! two-axis rotation and eases the displayed rotation toward it with damped
//! springs, producing smooth follow-through rather than snapping.
//!
//! The model is state-plus-target: pointer events retarget the springs, and
//! an external per-frame driver advances them via [`tick`](TiltModel::tick).
//!
//! # Example
//!
//! ```
//! use vitrine_core::Rect;
//! use vitrine_interact::tilt::TiltModel;
//!
//! let mut tilt = TiltModel::new(true);
//! let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
//!
//! // Pointer in the right half tilts around the Y axis
//! tilt.pointer_move(200.0, 50.0, bounds);
//! tilt.tick(1.0 / 60.0);
//! assert!(tilt.rotation().y_degrees > 0.0);
//!
//! // Leaving eases back to neutral
//! tilt.pointer_leave();
//! for _ in 0..180 {
//!     tilt.tick(1.0 / 60.0);
//! }
//! assert!(tilt.is_settled());
//! ```

use vitrine_core::Rect;

use crate::animation::Spring;

/// Default maximum tilt, in degrees, reached at the bounds' edges.
pub const DEFAULT_MAX_TILT_DEGREES: f32 = 12.0;

/// The displayed two-axis rotation, in degrees.
///
/// This is the style contract consumers feed into a perspective transform:
/// rotate about X by `x_degrees`, about Y by `y_degrees`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltRotation {
    /// Rotation around the X axis (positive tilts the top toward the viewer).
    pub x_degrees: f32,
    /// Rotation around the Y axis (positive tilts the right edge away).
    pub y_degrees: f32,
}

/// A pointer-driven tilt with spring-damped follow-through.
///
/// Pointer position is mapped to normalized offsets from the element's
/// center; the offsets scale to rotation targets capped at
/// `max_tilt_degrees`. Moving the pointer up tilts the top toward the
/// viewer (the X-axis sign is inverted relative to the pointer's
/// y offset).
///
/// A disabled model ignores all pointer input — callers construct it
/// disabled when the environment prefers reduced motion.
#[derive(Debug, Clone)]
pub struct TiltModel {
    enabled: bool,
    max_tilt_degrees: f32,
    rotation_x: Spring,
    rotation_y: Spring,
}

impl TiltModel {
    /// Create a model with the default maximum tilt.
    pub fn new(enabled: bool) -> Self {
        Self::with_max_tilt(enabled, DEFAULT_MAX_TILT_DEGREES)
    }

    /// Create a model with an explicit maximum tilt, in degrees.
    pub fn with_max_tilt(enabled: bool, max_tilt_degrees: f32) -> Self {
        Self {
            enabled,
            max_tilt_degrees,
            rotation_x: Spring::new(0.0),
            rotation_y: Spring::new(0.0),
        }
    }

    /// Whether pointer input is honored.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The maximum tilt in degrees.
    #[inline]
    pub fn max_tilt_degrees(&self) -> f32 {
        self.max_tilt_degrees
    }

    /// Handle a pointer move at `(x, y)` over an element with `bounds`.
    ///
    /// No-op when disabled. Zero-area bounds are skipped entirely (no state
    /// change) — degenerate geometry must not divide by zero. Targets are
    /// clamped to `±max_tilt_degrees`, so coordinates outside the bounds
    /// (e.g. during pointer capture) stay within the tilt range.
    pub fn pointer_move(&mut self, x: f32, y: f32, bounds: Rect) {
        if !self.enabled || bounds.is_empty() {
            return;
        }

        let dx = (x - bounds.left()) / bounds.width() - 0.5;
        let dy = (y - bounds.top()) / bounds.height() - 0.5;

        let max = self.max_tilt_degrees;
        self.rotation_y.set_target((dx * max).clamp(-max, max));
        self.rotation_x.set_target((-dy * max).clamp(-max, max));
    }

    /// Handle the pointer leaving the element.
    ///
    /// No-op when disabled; otherwise both targets ease back to 0 with the
    /// same spring dynamics as any other change.
    pub fn pointer_leave(&mut self) {
        if !self.enabled {
            return;
        }
        self.rotation_x.set_target(0.0);
        self.rotation_y.set_target(0.0);
    }

    /// Advance the springs by `dt` seconds.
    ///
    /// Call once per frame from the animation driver.
    pub fn tick(&mut self, dt: f32) {
        self.rotation_x.step(dt);
        self.rotation_y.step(dt);
    }

    /// The displayed rotation right now.
    pub fn rotation(&self) -> TiltRotation {
        TiltRotation {
            x_degrees: self.rotation_x.value(),
            y_degrees: self.rotation_y.value(),
        }
    }

    /// The rotation the springs are converging toward.
    pub fn target_rotation(&self) -> TiltRotation {
        TiltRotation {
            x_degrees: self.rotation_x.target(),
            y_degrees: self.rotation_y.target(),
        }
    }

    /// Whether both springs have converged.
    ///
    /// Use this to stop requesting animation frames, and as the "is
    /// animating" input to the compositor hint scheduler.
    pub fn is_settled(&self) -> bool {
        self.rotation_x.is_settled() && self.rotation_y.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;
    const TOLERANCE: f32 = 1e-5;

    fn bounds() -> Rect {
        Rect::new(100.0, 50.0, 200.0, 100.0)
    }

    #[test]
    fn test_center_targets_zero() {
        let mut tilt = TiltModel::new(true);
        let center = bounds().center();
        tilt.pointer_move(center.x, center.y, bounds());

        let target = tilt.target_rotation();
        assert!(target.x_degrees.abs() < TOLERANCE);
        assert!(target.y_degrees.abs() < TOLERANCE);
    }

    #[test]
    fn test_top_left_corner_mapping() {
        let mut tilt = TiltModel::new(true);
        tilt.pointer_move(bounds().left(), bounds().top(), bounds());

        let max = tilt.max_tilt_degrees();
        let target = tilt.target_rotation();
        // Half-extent-to-angle mapping: the corner is half the extent from
        // center on both axes.
        assert!((target.y_degrees - (-max / 2.0)).abs() < TOLERANCE);
        assert!((target.x_degrees - (max / 2.0)).abs() < TOLERANCE);
    }

    #[test]
    fn test_bottom_right_corner_mapping() {
        let mut tilt = TiltModel::new(true);
        tilt.pointer_move(bounds().right(), bounds().bottom(), bounds());

        let max = tilt.max_tilt_degrees();
        let target = tilt.target_rotation();
        assert!((target.y_degrees - max / 2.0).abs() < TOLERANCE);
        assert!((target.x_degrees - (-max / 2.0)).abs() < TOLERANCE);
    }

    #[test]
    fn test_targets_clamped_outside_bounds() {
        let mut tilt = TiltModel::new(true);
        // Far outside the element, as during pointer capture
        tilt.pointer_move(bounds().right() + 5000.0, bounds().top(), bounds());

        let max = tilt.max_tilt_degrees();
        let target = tilt.target_rotation();
        assert!(target.y_degrees <= max);
        assert!(target.x_degrees <= max);
    }

    #[test]
    fn test_disabled_ignores_pointer() {
        let mut tilt = TiltModel::new(false);
        tilt.pointer_move(bounds().left(), bounds().top(), bounds());
        tilt.pointer_leave();
        tilt.tick(FRAME);

        assert_eq!(tilt.rotation(), TiltRotation::default());
        assert_eq!(tilt.target_rotation(), TiltRotation::default());
    }

    #[test]
    fn test_zero_area_bounds_skipped() {
        let mut tilt = TiltModel::new(true);
        tilt.pointer_move(150.0, 75.0, bounds());
        let before = tilt.target_rotation();

        tilt.pointer_move(10.0, 10.0, Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(tilt.target_rotation(), before);

        let rotation = tilt.target_rotation();
        assert!(rotation.x_degrees.is_finite());
        assert!(rotation.y_degrees.is_finite());
    }

    #[test]
    fn test_displayed_rotation_lags_target() {
        let mut tilt = TiltModel::new(true);
        tilt.pointer_move(bounds().right(), bounds().bottom(), bounds());
        tilt.tick(FRAME);

        let rotation = tilt.rotation();
        let target = tilt.target_rotation();
        assert!(rotation.y_degrees > 0.0);
        assert!(rotation.y_degrees < target.y_degrees);
    }

    #[test]
    fn test_leave_eases_back_to_neutral() {
        let mut tilt = TiltModel::new(true);
        tilt.pointer_move(bounds().right(), bounds().top(), bounds());
        for _ in 0..30 {
            tilt.tick(FRAME);
        }
        assert!(tilt.rotation().y_degrees > 0.0);

        tilt.pointer_leave();
        assert_eq!(tilt.target_rotation(), TiltRotation::default());

        // Not an immediate jump
        assert!(tilt.rotation().y_degrees.abs() > 0.0);

        for _ in 0..180 {
            tilt.tick(FRAME);
        }
        assert!(tilt.is_settled());
        assert_eq!(tilt.rotation(), TiltRotation::default());
    }
}
