// SPDX-License-Identifier: MIT
//
// WCAG-style contrast math over tones.
//
// Contrast ratio is defined on relative luminance Y, but the theming
// layer thinks in tone (L*). These helpers convert between the two and
// search for tones that meet a requested ratio against a reference
// tone, reporting a −1.0 sentinel when no in-range tone can.

use crate::space::{lstar_from_y, y_from_lstar};

/// Tolerance between a requested ratio and the ratio a returned tone
/// actually achieves. Accounts for the L* ↔ Y round trip and the
/// luminance nudge below.
const RATIO_EPSILON: f64 = 0.04;

/// Nudge applied to a computed L* toward the interior of the gamut.
/// Color spaces disagree slightly near the luminance extremes; 0.4 L*
/// keeps returned tones displayable after conversion.
const LUMINANCE_GAMUT_MAP_TOLERANCE: f64 = 0.4;

/// WCAG contrast ratio of two relative luminances (0–100 scale).
///
/// Always ≥ 1 regardless of argument order.
#[must_use]
pub fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = if y1 > y2 { y1 } else { y2 };
    #[allow(clippy::float_cmp)]
    let darker = if lighter == y2 { y1 } else { y2 };
    (lighter + 5.0) / (darker + 5.0)
}

/// Contrast ratio of two tones (L*, 0–100).
#[must_use]
pub fn ratio_of_tones(tone_a: f64, tone_b: f64) -> f64 {
    ratio_of_ys(y_from_lstar(tone_a), y_from_lstar(tone_b))
}

/// The lightest tone with at least `ratio` contrast against `tone`.
///
/// Returns −1.0 when `tone` is out of range or no tone ≤ 100 reaches
/// the ratio (within [`RATIO_EPSILON`]).
#[must_use]
pub fn lighter(tone: f64, ratio: f64) -> f64 {
    if !(0.0..=100.0).contains(&tone) {
        return -1.0;
    }
    let dark_y = y_from_lstar(tone);
    let light_y = ratio * (dark_y + 5.0) - 5.0;
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > RATIO_EPSILON {
        return -1.0;
    }
    // Nudge into the gamut; the epsilon above already allows for it.
    let return_value = lstar_from_y(light_y) + LUMINANCE_GAMUT_MAP_TOLERANCE;
    if !(0.0..=100.0).contains(&return_value) {
        return -1.0;
    }
    return_value
}

/// The darkest tone with at least `ratio` contrast against `tone`.
///
/// Returns −1.0 when `tone` is out of range or no tone ≥ 0 reaches the
/// ratio (within [`RATIO_EPSILON`]).
#[must_use]
pub fn darker(tone: f64, ratio: f64) -> f64 {
    if !(0.0..=100.0).contains(&tone) {
        return -1.0;
    }
    let light_y = y_from_lstar(tone);
    let dark_y = (light_y + 5.0) / ratio - 5.0;
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > RATIO_EPSILON {
        return -1.0;
    }
    let return_value = lstar_from_y(dark_y) - LUMINANCE_GAMUT_MAP_TOLERANCE;
    if !(0.0..=100.0).contains(&return_value) {
        return -1.0;
    }
    return_value
}

/// Like [`lighter`], but clamps the sentinel to white.
#[must_use]
pub fn lighter_unsafe(tone: f64, ratio: f64) -> f64 {
    let lighter_safe = lighter(tone, ratio);
    if lighter_safe < 0.0 { 100.0 } else { lighter_safe }
}

/// Like [`darker`], but clamps the sentinel to black.
#[must_use]
pub fn darker_unsafe(tone: f64, ratio: f64) -> f64 {
    let darker_safe = darker(tone, ratio);
    if darker_safe < 0.0 { 0.0 } else { darker_safe }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn black_on_white_is_21() {
        assert!(approx(ratio_of_tones(100.0, 0.0), 21.0, 0.01));
        assert!(approx(ratio_of_tones(0.0, 100.0), 21.0, 0.01));
    }

    #[test]
    fn equal_tones_ratio_one() {
        for tone in [0.0, 30.0, 50.0, 90.0, 100.0] {
            assert!(approx(ratio_of_tones(tone, tone), 1.0, 1e-9), "tone {tone}");
        }
    }

    #[test]
    fn lighter_meets_requested_ratio() {
        let result = lighter(30.0, 3.0);
        assert!(result > 30.0);
        assert!(ratio_of_tones(result, 30.0) >= 3.0 - RATIO_EPSILON);
    }

    #[test]
    fn darker_meets_requested_ratio() {
        let result = darker(80.0, 4.5);
        assert!((0.0..80.0).contains(&result));
        assert!(ratio_of_tones(80.0, result) >= 4.5 - RATIO_EPSILON);
    }

    #[test]
    fn impossible_requests_return_sentinel() {
        // Nothing is 10:1 lighter than a near-white tone.
        assert!(approx(lighter(95.0, 10.0), -1.0, 1e-9));
        // Nothing is 21:1 darker than a mid tone.
        assert!(approx(darker(40.0, 21.0), -1.0, 1e-9));
    }

    #[test]
    fn out_of_range_tone_returns_sentinel() {
        assert!(approx(lighter(-5.0, 3.0), -1.0, 1e-9));
        assert!(approx(darker(101.0, 3.0), -1.0, 1e-9));
    }

    #[test]
    fn unsafe_variants_clamp_to_extremes() {
        assert!(approx(lighter_unsafe(95.0, 10.0), 100.0, 1e-9));
        assert!(approx(darker_unsafe(5.0, 21.0), 0.0, 1e-9));
        // Feasible requests pass through unchanged.
        assert!(approx(lighter_unsafe(30.0, 3.0), lighter(30.0, 3.0), 1e-12));
    }

    proptest! {
        // The ratio is monotone in tone separation: widening the gap
        // from the same base never lowers it.
        #[test]
        fn ratio_monotone_in_separation(base in 0.0f64..100.0, d1 in 0.0f64..50.0, d2 in 0.0f64..50.0) {
            let (near, far) = if d1 < d2 { (d1, d2) } else { (d2, d1) };
            let upper_near = (base + near).min(100.0);
            let upper_far = (base + far).min(100.0);
            prop_assert!(
                ratio_of_tones(base, upper_far) >= ratio_of_tones(base, upper_near) - 1e-9
            );
        }

        // Whatever `lighter` returns (sentinel aside) truly satisfies
        // the requested ratio within tolerance.
        #[test]
        fn lighter_contract(tone in 0.0f64..100.0, ratio in 1.0f64..21.0) {
            let result = lighter(tone, ratio);
            if result >= 0.0 {
                prop_assert!(ratio_of_tones(result, tone) >= ratio - RATIO_EPSILON);
                prop_assert!((0.0..=100.0).contains(&result));
            }
        }

        #[test]
        fn darker_contract(tone in 0.0f64..100.0, ratio in 1.0f64..21.0) {
            let result = darker(tone, ratio);
            if result >= 0.0 {
                prop_assert!(ratio_of_tones(tone, result) >= ratio - RATIO_EPSILON);
                prop_assert!((0.0..=100.0).contains(&result));
            }
        }
    }
}
