//! Distance-to-size mapping for dock icons.

/// Icon size when the pointer is absent or out of range, in px.
///
/// Fixed regardless of the configured magnification; only the peak of the
/// curve is tunable.
pub const RESTING_SIZE: f64 = 40.0;

/// Default peak size when the pointer sits dead-center on an icon, in px.
pub const DEFAULT_MAGNIFICATION: f64 = 60.0;

/// Default influence radius around an icon's center, in px.
pub const DEFAULT_DISTANCE: f64 = 140.0;

/// Three-point piecewise-linear curve mapping signed pointer distance to
/// icon size.
///
/// Over the domain `[-radius, 0, radius]` the size runs
/// `[RESTING_SIZE, peak, RESTING_SIZE]`; outside that range it clamps to
/// [`RESTING_SIZE`]. Non-finite distances (the pointer-absent sentinel)
/// also map to the resting size, so callers can feed `f64::INFINITY`
/// straight through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnifyCurve {
    peak: f64,
    radius: f64,
}

impl MagnifyCurve {
    pub fn new(peak: f64, radius: f64) -> Self {
        Self { peak, radius }
    }

    /// Peak size at the center of the curve.
    pub fn peak(self) -> f64 {
        self.peak
    }

    /// Influence radius; beyond this the icon rests.
    pub fn radius(self) -> f64 {
        self.radius
    }

    /// Target size for a signed pointer-to-center distance.
    pub fn target_size(self, distance: f64) -> f64 {
        if !distance.is_finite() {
            return RESTING_SIZE;
        }
        let offset = distance.abs();
        if offset >= self.radius {
            return RESTING_SIZE;
        }
        // Linear falloff from the peak at the center to the resting size
        // at the edge of the radius. `offset < radius` here, so the radius
        // is nonzero.
        let t = offset / self.radius;
        self.peak + (RESTING_SIZE - self.peak) * t
    }
}

impl Default for MagnifyCurve {
    fn default() -> Self {
        Self::new(DEFAULT_MAGNIFICATION, DEFAULT_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_at_center() {
        let curve = MagnifyCurve::default();
        assert_eq!(curve.target_size(0.0), DEFAULT_MAGNIFICATION);
    }

    #[test]
    fn rests_at_and_beyond_the_radius() {
        let curve = MagnifyCurve::default();
        assert_eq!(curve.target_size(140.0), RESTING_SIZE);
        assert_eq!(curve.target_size(-140.0), RESTING_SIZE);
        assert_eq!(curve.target_size(150.0), RESTING_SIZE);
        assert_eq!(curve.target_size(-5000.0), RESTING_SIZE);
    }

    #[test]
    fn interpolates_halfway() {
        // Icon centered at x=500, magnification 60, distance 140:
        // pointer at 500 -> 60, at 570 -> 50, at 650 -> 40.
        let curve = MagnifyCurve::new(60.0, 140.0);
        let center = 500.0;
        assert_eq!(curve.target_size(500.0 - center), 60.0);
        assert!((curve.target_size(570.0 - center) - 50.0).abs() < 1e-9);
        assert_eq!(curve.target_size(650.0 - center), 40.0);
    }

    #[test]
    fn sentinel_distance_rests() {
        let curve = MagnifyCurve::default();
        assert_eq!(curve.target_size(f64::INFINITY), RESTING_SIZE);
        assert_eq!(curve.target_size(f64::NEG_INFINITY), RESTING_SIZE);
        assert_eq!(curve.target_size(f64::NAN), RESTING_SIZE);
    }

    #[test]
    fn zero_radius_always_rests() {
        let curve = MagnifyCurve::new(60.0, 0.0);
        assert_eq!(curve.target_size(0.0), RESTING_SIZE);
        assert_eq!(curve.target_size(1.0), RESTING_SIZE);
    }

    #[test]
    fn resting_size_ignores_magnification() {
        for peak in [40.0, 60.0, 120.0, 300.0] {
            let curve = MagnifyCurve::new(peak, 140.0);
            assert_eq!(curve.target_size(140.0), RESTING_SIZE);
        }
    }
}
