//! Contrast requirements as a function of the user's contrast slider.

use tinct_color::math::lerp;

/// A contrast requirement sampled at the four anchor points of the
/// contrast slider: reduced (−1.0), standard (0.0), medium (0.5), and
/// high (1.0). Values between anchors are linearly interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCurve {
    low: f64,
    normal: f64,
    medium: f64,
    high: f64,
}

impl ContrastCurve {
    #[must_use]
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self { low, normal, medium, high }
    }

    /// The required contrast ratio at `contrast_level` in [−1, 1].
    /// Levels outside the range clamp to the nearest anchor.
    #[must_use]
    pub fn get(&self, contrast_level: f64) -> f64 {
        if contrast_level <= -1.0 {
            self.low
        } else if contrast_level < 0.0 {
            lerp(self.low, self.normal, (contrast_level + 1.0) / 1.0)
        } else if contrast_level < 0.5 {
            lerp(self.normal, self.medium, contrast_level / 0.5)
        } else if contrast_level < 1.0 {
            lerp(self.medium, self.high, (contrast_level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_return_exact_values() {
        let curve = ContrastCurve::new(1.0, 3.0, 4.5, 7.0);
        assert_eq!(curve.get(-1.0), 1.0);
        assert_eq!(curve.get(0.0), 3.0);
        assert_eq!(curve.get(0.5), 4.5);
        assert_eq!(curve.get(1.0), 7.0);
    }

    #[test]
    fn between_anchors_interpolates() {
        let curve = ContrastCurve::new(1.0, 3.0, 4.5, 7.0);
        assert!((curve.get(-0.5) - 2.0).abs() < 1e-12);
        assert!((curve.get(0.25) - 3.75).abs() < 1e-12);
        assert!((curve.get(0.75) - 5.75).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_levels_clamp() {
        let curve = ContrastCurve::new(1.0, 3.0, 4.5, 7.0);
        assert_eq!(curve.get(-2.0), 1.0);
        assert_eq!(curve.get(1.5), 7.0);
    }
}
