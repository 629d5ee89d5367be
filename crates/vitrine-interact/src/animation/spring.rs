//! Damped spring value model.
//!
//! A [`Spring`] drives a displayed value toward a target with
//! overshoot-controlled convergence. The spring is state-plus-target: it is
//! advanced by an external per-frame driver via [`step`](Spring::step) and
//! never schedules anything itself, so it can be ticked from any
//! single-threaded animation source.

/// Default spring stiffness, tuned for snappy-but-smooth pointer response.
pub const DEFAULT_STIFFNESS: f32 = 220.0;

/// Default spring damping, tuned against [`DEFAULT_STIFFNESS`] so motion
/// settles without visible oscillation.
pub const DEFAULT_DAMPING: f32 = 22.0;

/// Largest integration substep, in seconds.
///
/// `step` subdivides long frame gaps into substeps of at most this length so
/// the integration stays stable after a stalled frame.
const MAX_SUBSTEP: f32 = 0.004;

/// Distance and velocity below which the spring counts as settled.
const SETTLE_EPSILON: f32 = 0.001;

/// A scalar value driven toward a target by a damped spring.
///
/// Integration is semi-implicit Euler. The spring is a pure value type:
/// `step(dt)` maps (current state, target, elapsed seconds) to the next
/// state, with no clock of its own.
///
/// # Example
///
/// ```
/// use vitrine_interact::animation::Spring;
///
/// let mut spring = Spring::new(0.0);
/// spring.set_target(10.0);
///
/// // Driven by an external ticker, e.g. once per frame
/// for _ in 0..120 {
///     spring.step(1.0 / 60.0);
/// }
/// assert!(spring.is_settled());
/// assert_eq!(spring.value(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    /// Create a spring at rest at `position`, targeting `position`.
    pub fn new(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
        }
    }

    /// Create a spring with explicit dynamics parameters.
    pub fn with_params(position: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            ..Self::new(position)
        }
    }

    /// The current displayed value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.position
    }

    /// The current velocity, in value units per second.
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// The value the spring is converging toward.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Set a new target. The displayed value eases toward it on subsequent
    /// `step` calls; it does not jump.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` immediately, at rest.
    ///
    /// Resets velocity and retargets to `value`.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.velocity = 0.0;
        self.target = value;
    }

    /// Whether the spring has converged on its target.
    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < SETTLE_EPSILON
            && self.velocity.abs() < SETTLE_EPSILON
    }

    /// Advance the spring by `dt` seconds.
    ///
    /// `dt <= 0` is a no-op. Long gaps are integrated in substeps so a
    /// stalled frame converges instead of exploding. Once within the settle
    /// threshold the value is pinned exactly to the target, so consumers see
    /// a stable final transform rather than a denormal tail.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            remaining -= h;

            let displacement = self.target - self.position;
            let acceleration = self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(spring: &mut Spring, seconds: f32) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let spring = Spring::new(5.0);
        assert_eq!(spring.value(), 5.0);
        assert_eq!(spring.target(), 5.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_converges_to_target() {
        let mut spring = Spring::new(0.0);
        spring.set_target(12.0);
        run(&mut spring, 2.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 12.0);
    }

    #[test]
    fn test_value_lags_target() {
        let mut spring = Spring::new(0.0);
        spring.set_target(10.0);
        spring.step(FRAME);
        // Eased, not snapped
        assert!(spring.value() > 0.0);
        assert!(spring.value() < 10.0);
    }

    #[test]
    fn test_no_large_overshoot() {
        // The default tuning settles without visible oscillation: the value
        // may overshoot slightly but stays well inside 10% of the travel.
        let mut spring = Spring::new(0.0);
        spring.set_target(10.0);

        let mut max_seen = 0.0f32;
        for _ in 0..600 {
            spring.step(FRAME);
            max_seen = max_seen.max(spring.value());
        }
        assert!(max_seen < 11.0, "overshoot too large: {max_seen}");
    }

    #[test]
    fn test_zero_and_negative_dt_are_noops() {
        let mut spring = Spring::new(0.0);
        spring.set_target(10.0);
        spring.step(FRAME);
        let value = spring.value();

        spring.step(0.0);
        assert_eq!(spring.value(), value);
        spring.step(-1.0);
        assert_eq!(spring.value(), value);
        spring.step(f32::NAN);
        assert_eq!(spring.value(), value);
    }

    #[test]
    fn test_single_huge_dt_converges() {
        let mut spring = Spring::new(0.0);
        spring.set_target(10.0);
        spring.step(5.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 10.0);
    }

    #[test]
    fn test_snap_to_resets_motion() {
        let mut spring = Spring::new(0.0);
        spring.set_target(10.0);
        run(&mut spring, 0.1);
        assert!(spring.velocity().abs() > 0.0);

        spring.snap_to(3.0);
        assert_eq!(spring.value(), 3.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 3.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_settled_spring_pins_exactly() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        run(&mut spring, 2.0);
        assert_eq!(spring.value(), 1.0);

        // Further stepping holds the exact value
        spring.step(FRAME);
        assert_eq!(spring.value(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut spring = Spring::new(0.0);
        spring.set_target(10.0);
        run(&mut spring, 0.1);

        // Reset request eases back like any other change
        spring.set_target(0.0);
        run(&mut spring, 2.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.0);
    }
}
