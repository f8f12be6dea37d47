//! Spring smoothing for animated size values.
//!
//! Values are polled each frame: set a target, call `tick(dt)`, read
//! `value()`. Each new target supersedes the previous one; the spring
//! continuously chases whatever the latest target is.

/// Spring tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Mass of the animated value. Lower mass reacts faster.
    pub mass: f64,
    /// Restoring force per unit of displacement.
    pub stiffness: f64,
    /// Velocity-proportional drag.
    pub damping: f64,
}

impl SpringConfig {
    /// Tuning used by dock icons: slightly overdamped, settles quickly
    /// with no visible bounce.
    pub const DOCK: SpringConfig = SpringConfig {
        mass: 0.1,
        stiffness: 150.0,
        damping: 12.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DOCK
    }
}

/// Largest simulated step per tick, in seconds. A stalled frame advances
/// the spring by at most this much instead of jumping.
const MAX_DT: f64 = 1.0 / 30.0;

/// Internal integration substep, in seconds. The dock tuning has a very
/// high damping-to-mass ratio; explicit Euler needs steps this small to
/// stay stable at frame-length ticks.
const SUBSTEP: f64 = 1.0 / 240.0;

/// Below these thresholds the value snaps to the target and the spring
/// reports settled, stopping micro-oscillation.
const SNAP_DISPLACEMENT: f64 = 1e-3;
const SNAP_VELOCITY: f64 = 1e-2;

/// An animated value that chases a moving target with spring physics.
#[derive(Debug, Clone)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    /// Set a new target; the animation begins (or redirects) on the next
    /// tick.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Jump straight to a value with no animation.
    pub fn set_immediate(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Semi-implicit Euler over `F = -k·x - c·v`, `a = F/m`, subdivided
    /// into [`SUBSTEP`]-sized slices.
    pub fn tick(&mut self, dt: f64) {
        let mut remaining = dt.min(MAX_DT);
        while remaining > 0.0 {
            let step = remaining.min(SUBSTEP);
            let displacement = self.value - self.target;
            let force =
                -self.config.stiffness * displacement - self.config.damping * self.velocity;

            self.velocity += force / self.config.mass * step;
            self.value += self.velocity * step;
            remaining -= step;
        }

        if (self.value - self.target).abs() < SNAP_DISPLACEMENT
            && self.velocity.abs() < SNAP_VELOCITY
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Current animated value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// True once the value has snapped to the target.
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::new(40.0, SpringConfig::DOCK);
        spring.set_target(60.0);

        for _ in 0..120 {
            spring.tick(FRAME);
        }

        assert_eq!(spring.value(), 60.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn set_immediate_skips_animation() {
        let mut spring = Spring::new(40.0, SpringConfig::DOCK);
        spring.set_immediate(55.0);

        assert_eq!(spring.value(), 55.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn dock_tuning_does_not_overshoot() {
        let mut spring = Spring::new(40.0, SpringConfig::DOCK);
        spring.set_target(60.0);

        let mut max_seen = spring.value();
        for _ in 0..240 {
            spring.tick(FRAME);
            max_seen = max_seen.max(spring.value());
        }

        assert!(max_seen <= 60.0 + 0.01, "overshot to {max_seen}");
    }

    #[test]
    fn retarget_mid_flight_redirects() {
        let mut spring = Spring::new(40.0, SpringConfig::DOCK);
        spring.set_target(60.0);

        for _ in 0..5 {
            spring.tick(FRAME);
        }
        spring.set_target(40.0);
        for _ in 0..240 {
            spring.tick(FRAME);
        }

        assert_eq!(spring.value(), 40.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn non_finite_targets_are_ignored() {
        let mut spring = Spring::new(40.0, SpringConfig::DOCK);
        spring.set_target(f64::INFINITY);
        spring.set_target(f64::NAN);

        assert_eq!(spring.target(), 40.0);
        spring.tick(FRAME);
        assert!(spring.value().is_finite());
    }

    #[test]
    fn oversized_steps_stay_stable() {
        let mut spring = Spring::new(40.0, SpringConfig::DOCK);
        spring.set_target(60.0);

        // A stalled frame should not fling the value off to infinity.
        for _ in 0..60 {
            spring.tick(0.5);
        }

        assert!(spring.value().is_finite());
        assert!((spring.value() - 60.0).abs() < 1.0);
    }
}
