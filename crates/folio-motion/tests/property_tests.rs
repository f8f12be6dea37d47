//! Property-based tests for the dock motion math.
//!
//! Uses proptest to verify the curve's shape invariants and the spring's
//! convergence across the whole configuration space.

use proptest::prelude::*;

use folio_motion::{MagnifyCurve, Spring, SpringConfig, RESTING_SIZE};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Peak sizes worth supporting: from below the resting size up to huge.
fn peak_strategy() -> impl Strategy<Value = f64> {
    10.0..400.0f64
}

/// Influence radii; zero is excluded (degenerate curves are unit-tested).
fn radius_strategy() -> impl Strategy<Value = f64> {
    1.0..1000.0f64
}

/// Signed pointer-to-center distances, well past any radius.
fn distance_strategy() -> impl Strategy<Value = f64> {
    -5000.0..5000.0f64
}

// ============================================================================
// Curve Properties
// ============================================================================

proptest! {
    /// Anywhere at or beyond the radius the icon rests.
    #[test]
    fn out_of_range_rests(peak in peak_strategy(), radius in radius_strategy(), excess in 0.0..5000.0f64) {
        let curve = MagnifyCurve::new(peak, radius);
        prop_assert_eq!(curve.target_size(radius + excess), RESTING_SIZE);
        prop_assert_eq!(curve.target_size(-(radius + excess)), RESTING_SIZE);
    }

    /// Dead-center always yields the configured peak.
    #[test]
    fn center_hits_peak(peak in peak_strategy(), radius in radius_strategy()) {
        let curve = MagnifyCurve::new(peak, radius);
        prop_assert_eq!(curve.target_size(0.0), peak);
    }

    /// The curve only depends on |distance|.
    #[test]
    fn symmetric_in_sign(peak in peak_strategy(), radius in radius_strategy(), d in distance_strategy()) {
        let curve = MagnifyCurve::new(peak, radius);
        prop_assert_eq!(curve.target_size(d), curve.target_size(-d));
    }

    /// Output never leaves the band between the resting size and the peak.
    #[test]
    fn bounded_by_rest_and_peak(peak in peak_strategy(), radius in radius_strategy(), d in distance_strategy()) {
        let curve = MagnifyCurve::new(peak, radius);
        let size = curve.target_size(d);
        let lo = RESTING_SIZE.min(peak);
        let hi = RESTING_SIZE.max(peak);
        prop_assert!(size >= lo && size <= hi, "size {} outside [{}, {}]", size, lo, hi);
    }

    /// Moving away from the center never grows the icon (for peaks above
    /// the resting size).
    #[test]
    fn monotone_falloff(radius in radius_strategy(), t1 in 0.0..1.0f64, t2 in 0.0..1.0f64) {
        let curve = MagnifyCurve::new(60.0, radius);
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let near_size = curve.target_size(near * radius);
        let far_size = curve.target_size(far * radius);
        prop_assert!(near_size >= far_size, "size grew from {} to {}", near_size, far_size);
    }

    /// No jump at the edge of the influence radius.
    #[test]
    fn continuous_at_radius_edge(peak in peak_strategy(), radius in radius_strategy()) {
        let curve = MagnifyCurve::new(peak, radius);
        let just_inside = curve.target_size(radius * (1.0 - 1e-12));
        prop_assert!((just_inside - RESTING_SIZE).abs() < 1e-6);
    }
}

// ============================================================================
// Spring Properties
// ============================================================================

proptest! {
    /// The dock spring settles on any reachable target within two
    /// simulated seconds at 60fps.
    #[test]
    fn spring_converges(initial in 10.0..400.0f64, target in 10.0..400.0f64) {
        let mut spring = Spring::new(initial, SpringConfig::DOCK);
        spring.set_target(target);

        for _ in 0..120 {
            spring.tick(1.0 / 60.0);
        }

        prop_assert!(spring.is_settled(), "stuck at {} chasing {}", spring.value(), target);
        prop_assert_eq!(spring.value(), target);
    }

    /// Retargeting mid-flight never destabilizes the integrator.
    #[test]
    fn spring_survives_target_churn(targets in prop::collection::vec(10.0..400.0f64, 1..50)) {
        let mut spring = Spring::new(RESTING_SIZE, SpringConfig::DOCK);

        for target in &targets {
            spring.set_target(*target);
            // A couple of frames before the next redirect lands.
            spring.tick(1.0 / 60.0);
            spring.tick(1.0 / 60.0);
            prop_assert!(spring.value().is_finite());
        }

        // Let the final target win.
        for _ in 0..240 {
            spring.tick(1.0 / 60.0);
        }
        prop_assert_eq!(spring.value(), *targets.last().unwrap());
    }

    /// Pointer-leave from any state relaxes the size back to rest.
    #[test]
    fn pointer_leave_relaxes_to_rest(d in -200.0..200.0f64) {
        let curve = MagnifyCurve::default();
        let mut spring = Spring::new(RESTING_SIZE, SpringConfig::DOCK);

        // Pointer hovers somewhere, then leaves (sentinel distance).
        spring.set_target(curve.target_size(d));
        for _ in 0..30 {
            spring.tick(1.0 / 60.0);
        }
        spring.set_target(curve.target_size(f64::INFINITY));
        for _ in 0..120 {
            spring.tick(1.0 / 60.0);
        }

        prop_assert_eq!(spring.value(), RESTING_SIZE);
    }
}
