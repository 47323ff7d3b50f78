//! Damped spring integrator driving entrance motion.
//!
//! ## Usage
//!
//! Configure a [`SpringTuning`] on the grid args; the per-item springs are
//! stepped internally on every `tick`.

/// Stiffness/damping pair forwarded opaquely to the spring integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTuning {
    /// Restoring force coefficient.
    pub stiffness: f32,
    /// Absolute damping coefficient.
    pub damping: f32,
}

impl SpringTuning {
    /// Near-critically damped motion with no visible overshoot. The default.
    pub const NO_WOBBLE: Self = Self::new(170.0, 26.0);
    /// Soft, unhurried motion.
    pub const GENTLE: Self = Self::new(120.0, 14.0);
    /// Pronounced overshoot.
    pub const WOBBLY: Self = Self::new(180.0, 12.0);
    /// Quick settle with a small overshoot.
    pub const STIFF: Self = Self::new(210.0, 20.0);

    /// Creates a tuning from raw coefficients.
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }
}

impl Default for SpringTuning {
    fn default() -> Self {
        Self::NO_WOBBLE
    }
}

const REST_THRESHOLD: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub(crate) fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub(crate) fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub(crate) fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub(crate) fn value(self) -> f32 {
        self.value
    }

    pub(crate) fn update(&mut self, dt: f32, tuning: SpringTuning) {
        let dt = dt.clamp(0.0, 0.05);
        let stiffness = tuning.stiffness.max(0.0);
        if stiffness == 0.0 {
            self.snap_to(self.target);
            return;
        }

        let damping = tuning.damping.max(0.0);
        let displacement = self.value - self.target;
        let acceleration = -stiffness * displacement - damping * self.velocity;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if (self.value - self.target).abs() < REST_THRESHOLD
            && self.velocity.abs() < REST_THRESHOLD
        {
            self.snap_to(self.target);
        }
    }

    pub(crate) fn is_animating(self) -> bool {
        (self.value - self.target).abs() >= REST_THRESHOLD
            || self.velocity.abs() >= REST_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring, tuning: SpringTuning) -> usize {
        let mut frames = 0;
        while spring.is_animating() {
            spring.update(1.0 / 60.0, tuning);
            frames += 1;
            assert!(frames < 10_000, "spring failed to converge");
        }
        frames
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let spring = Spring::new(0.3);
        assert_eq!(spring.value(), 0.3);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_spring_converges_to_exact_target() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        let frames = settle(&mut spring, SpringTuning::NO_WOBBLE);
        assert!(frames > 1, "convergence should take multiple frames");
        assert_eq!(spring.value(), 1.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_zero_stiffness_snaps_immediately() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        spring.update(1.0 / 60.0, SpringTuning::new(0.0, 26.0));
        assert_eq!(spring.value(), 1.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        spring.update(10.0, SpringTuning::NO_WOBBLE);
        let after_clamped = spring.value();

        let mut reference = Spring::new(0.0);
        reference.set_target(1.0);
        reference.update(0.05, SpringTuning::NO_WOBBLE);

        assert_eq!(after_clamped, reference.value());
    }

    #[test]
    fn test_wobbly_overshoots_target() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        let mut peak = 0.0f32;
        for _ in 0..600 {
            spring.update(1.0 / 60.0, SpringTuning::WOBBLY);
            peak = peak.max(spring.value());
        }
        assert!(peak > 1.0);
        assert_eq!(spring.value(), 1.0);
    }
}
