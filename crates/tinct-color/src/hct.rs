// SPDX-License-Identifier: MIT
//
// HCT — Hue, Chroma, Tone — and its solver.
//
// HCT combines CAM16 hue and chroma with CIE L* tone: perceptual hue
// and colorfulness, but a lightness axis that maps directly onto
// WCAG-style contrast math. The forward direction (color → HCT) is the
// closed-form CAM16 model; the reverse (HCT → color) has no closed
// form and is solved numerically here.
//
// Solver strategy, in order:
//
//   1. Degenerate cases (no chroma, or tone at the extremes) return
//      the neutral gray directly — expected inputs, not errors.
//   2. Newton's method on CAM16 lightness J, with the forward
//      equations inlined. Converges in a few rounds when the target
//      is comfortably inside the sRGB gamut.
//   3. Bisection gamut mapping: walk the edge of the RGB cube at the
//      target luminance, bracket the target hue between two cube
//      vertices, then bisect each channel across "critical planes"
//      (the unquantized byte boundaries) until the bracket collapses.
//
// Phase 3 is unconditionally convergent within its fixed iteration
// budget, so the solver has no failure mode for valid input: it always
// returns the closest displayable color with the requested hue and
// tone, and as much of the requested chroma as the gamut allows.

use std::sync::LazyLock;

use crate::argb::Argb;
use crate::cam16::Cam16;
use crate::math::{matrix_multiply, sanitize_degrees, signum};
use crate::space::{argb_from_linrgb, argb_from_lstar, lstar_from_argb, true_delinearized, y_from_lstar};
use crate::viewing::ViewingConditions;

/// A color in HCT space, plus the sRGB color it was solved to.
///
/// `hue` ∈ [0, 360), `chroma` ≥ 0, `tone` ∈ [0, 100]. The stored
/// components are the *actual* values of the solved color, which may
/// have less chroma than requested when the request was out of gamut.
#[derive(Debug, Clone, Copy)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Solve for the closest in-gamut color with this hue/chroma/tone.
    #[must_use]
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// The HCT coordinates of an existing color.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn chroma(&self) -> f64 {
        self.chroma
    }

    #[inline]
    #[must_use]
    pub const fn tone(&self) -> f64 {
        self.tone
    }

    /// The solved sRGB color.
    #[inline]
    #[must_use]
    pub const fn to_argb(&self) -> Argb {
        self.argb
    }

    /// A new color with the hue replaced; chroma/tone re-solved.
    #[must_use]
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::new(hue, self.chroma, self.tone)
    }

    /// A new color with the chroma replaced.
    #[must_use]
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::new(self.hue, chroma, self.tone)
    }

    /// A new color with the tone replaced.
    #[must_use]
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::new(self.hue, self.chroma, tone)
    }
}

impl PartialEq for Hct {
    fn eq(&self, other: &Self) -> bool {
        self.argb == other.argb
    }
}

impl Eq for Hct {}

// ─── Solver ──────────────────────────────────────────────────────────────────

/// Find the sRGB color with the given hue (degrees), chroma, and tone.
///
/// Sufficiently chromaless or extreme-tone requests return the neutral
/// gray at that tone; otherwise the exact Newton solve is attempted and
/// the bisection fallback finishes the job when the request is outside
/// the gamut.
#[must_use]
pub fn solve_to_argb(hue: f64, chroma: f64, tone: f64) -> Argb {
    if chroma < 1e-4 || !(0.0001..=99.9999).contains(&tone) {
        return argb_from_lstar(tone);
    }
    let hue_radians = sanitize_degrees(hue).to_radians();
    let y = y_from_lstar(tone);
    if let Some(exact) = find_result_by_j(hue_radians, chroma, y) {
        return exact;
    }
    argb_from_linrgb(bisect_to_limit(y, hue_radians))
}

// Linear RGB (0–100) → scaled-discount RGB, the solver's working space.
// Fixed to the default viewing conditions; pre-folds the CAT16 matrix,
// the sRGB→XYZ matrix, and the default discount factors.
const SCALED_DISCOUNT_FROM_LINRGB: [[f64; 3]; 3] = [
    [0.001200833568784504, 0.002389694492170889, 0.0002795742885861124],
    [0.0005891086651375999, 0.0029785502573438758, 0.0003270666104008398],
    [0.00010146692491640572, 0.0005364214359186694, 0.0032979401770712076],
];

const LINRGB_FROM_SCALED_DISCOUNT: [[f64; 3]; 3] = [
    [1373.2198709594231, -1100.4251190754821, -7.278681089101213],
    [-271.815969077903, 559.6580465940733, -32.46047482791194],
    [1.9622899599665666, -57.173814538844006, 308.7233197249669],
];

const Y_FROM_LINRGB: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Critical planes: the linear-RGB values of the 255 byte midpoints
/// `(i + 0.5) / 255`, i.e. where a channel's rounded byte value flips.
/// Bisecting across these planes walks the solver one displayable color
/// at a time.
static CRITICAL_PLANES: LazyLock<[f64; 255]> = LazyLock::new(|| {
    let mut planes = [0.0; 255];
    for (i, plane) in planes.iter_mut().enumerate() {
        let mid = i as f64 + 0.5;
        // Invert true_delinearized at the byte midpoint.
        let normalized = mid / 255.0;
        *plane = if normalized <= 0.040449936 {
            normalized / 12.92 * 100.0
        } else {
            ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
        };
    }
    planes
});

/// The signed-power chromatic adaptation applied to a scaled-discount
/// component.
fn chromatic_adaptation(component: f64) -> f64 {
    let af = component.abs().powf(0.42);
    signum(component) * 400.0 * af / (af + 27.13)
}

/// Inverse of [`chromatic_adaptation`].
fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let adapted_abs = adapted.abs();
    let base = (27.13 * adapted_abs / (400.0 - adapted_abs)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

/// CAM16 hue (radians) of a linear RGB triple, default conditions.
fn hue_of(linrgb: [f64; 3]) -> f64 {
    let scaled = matrix_multiply(linrgb, &SCALED_DISCOUNT_FROM_LINRGB);
    let r_a = chromatic_adaptation(scaled[0]);
    let g_a = chromatic_adaptation(scaled[1]);
    let b_a = chromatic_adaptation(scaled[2]);
    let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a)
}

/// Wrap an angle in radians into `[0, 2π)`.
fn sanitize_radians(angle: f64) -> f64 {
    (angle + std::f64::consts::PI * 8.0) % (std::f64::consts::PI * 2.0)
}

/// Whether `b` lies on the counter-clockwise arc from `a` to `c`.
fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    let delta_ab = sanitize_radians(b - a);
    let delta_ac = sanitize_radians(c - a);
    delta_ab < delta_ac
}

/// Where `mid` falls between `source` and `target`, as a 0–1 fraction.
fn intercept(source: f64, mid: f64, target: f64) -> f64 {
    (mid - source) / (target - source)
}

fn lerp_point(source: [f64; 3], t: f64, target: [f64; 3]) -> [f64; 3] {
    [
        source[0] + (target[0] - source[0]) * t,
        source[1] + (target[1] - source[1]) * t,
        source[2] + (target[2] - source[2]) * t,
    ]
}

/// Intersect the segment `source`→`target` with the plane
/// `point[axis] == coordinate`.
fn set_coordinate(source: [f64; 3], coordinate: f64, target: [f64; 3], axis: usize) -> [f64; 3] {
    let t = intercept(source[axis], coordinate, target[axis]);
    lerp_point(source, t, target)
}

fn is_bounded(x: f64) -> bool {
    (0.0..=100.0).contains(&x)
}

/// The `n`th candidate vertex of the RGB cube's intersection with the
/// plane of luminance `y`. Out-of-cube candidates return a negative
/// first coordinate as a sentinel.
///
/// n 0–3 solve for R, 4–7 for G, 8–11 for B, each with the other two
/// channels pinned to a cube edge.
fn nth_vertex(y: f64, n: usize) -> [f64; 3] {
    let k_r = Y_FROM_LINRGB[0];
    let k_g = Y_FROM_LINRGB[1];
    let k_b = Y_FROM_LINRGB[2];
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    if n < 4 {
        let g = coord_a;
        let b = coord_b;
        let r = (y - g * k_g - b * k_b) / k_r;
        if is_bounded(r) {
            [r, g, b]
        } else {
            [-1.0, -1.0, -1.0]
        }
    } else if n < 8 {
        let b = coord_a;
        let r = coord_b;
        let g = (y - r * k_r - b * k_b) / k_g;
        if is_bounded(g) {
            [r, g, b]
        } else {
            [-1.0, -1.0, -1.0]
        }
    } else {
        let r = coord_a;
        let g = coord_b;
        let b = (y - r * k_r - g * k_g) / k_b;
        if is_bounded(b) {
            [r, g, b]
        } else {
            [-1.0, -1.0, -1.0]
        }
    }
}

/// Find the two cube-boundary points at luminance `y` whose hues
/// bracket `target_hue`. Returns `[left, right]`.
fn bisect_to_segment(y: f64, target_hue: f64) -> [[f64; 3]; 2] {
    let mut left = [-1.0, -1.0, -1.0];
    let mut right = left;
    let mut left_hue = 0.0;
    let mut right_hue = 0.0;
    let mut initialized = false;
    let mut uncut = true;
    for n in 0..12 {
        let mid = nth_vertex(y, n);
        if mid[0] < 0.0 {
            continue;
        }
        let mid_hue = hue_of(mid);
        if !initialized {
            left = mid;
            right = mid;
            left_hue = mid_hue;
            right_hue = mid_hue;
            initialized = true;
            continue;
        }
        if uncut || are_in_cyclic_order(left_hue, mid_hue, right_hue) {
            uncut = false;
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                right_hue = mid_hue;
            } else {
                left = mid;
                left_hue = mid_hue;
            }
        }
    }
    [left, right]
}

fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

#[allow(clippy::cast_possible_truncation)]
fn critical_plane_below(x: f64) -> i32 {
    (x - 0.5).floor() as i32
}

#[allow(clippy::cast_possible_truncation)]
fn critical_plane_above(x: f64) -> i32 {
    (x - 0.5).ceil() as i32
}

/// Gamut-mapped fallback: the in-gamut color at luminance `y` whose
/// hue is `target_hue`, found by bisecting each channel across the
/// critical planes while keeping the target hue inside the bracket.
fn bisect_to_limit(y: f64, target_hue: f64) -> [f64; 3] {
    let [mut left, mut right] = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(left);
    for axis in 0..3 {
        if (left[axis] - right[axis]).abs() > 1e-12 {
            let mut l_plane;
            let mut r_plane;
            if left[axis] < right[axis] {
                l_plane = critical_plane_below(true_delinearized(left[axis]));
                r_plane = critical_plane_above(true_delinearized(right[axis]));
            } else {
                l_plane = critical_plane_above(true_delinearized(left[axis]));
                r_plane = critical_plane_below(true_delinearized(right[axis]));
            }
            for _ in 0..8 {
                if (r_plane - l_plane).abs() <= 1 {
                    break;
                }
                let m_plane = (l_plane + r_plane).div_euclid(2);
                #[allow(clippy::cast_sign_loss)]
                let mid_plane_coordinate = CRITICAL_PLANES[m_plane as usize];
                let mid = set_coordinate(left, mid_plane_coordinate, right, axis);
                let mid_hue = hue_of(mid);
                if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                    right = mid;
                    r_plane = m_plane;
                } else {
                    left = mid;
                    left_hue = mid_hue;
                    l_plane = m_plane;
                }
            }
        }
    }
    midpoint(left, right)
}

/// Exact solve: Newton's method on CAM16 J with the forward equations
/// inlined. Returns `None` when the root leaves the gamut — negative
/// channel, non-positive luminance, or a channel above 100.01 at
/// convergence — signaling the caller to fall back to bisection.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<Argb> {
    // Initial estimate: J grows roughly with the square root of Y.
    let mut j = y.sqrt() * 11.0;
    let vc = ViewingConditions::standard();
    let t_inner_coeff = 1.0 / (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let h_sin = hue_radians.sin();
    let h_cos = hue_radians.cos();
    for iteration_round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z);
        let p2 = ac / vc.nbb;
        let gamma =
            23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;
        let r_c_scaled = inverse_chromatic_adaptation(r_a);
        let g_c_scaled = inverse_chromatic_adaptation(g_a);
        let b_c_scaled = inverse_chromatic_adaptation(b_a);
        let linrgb = matrix_multiply(
            [r_c_scaled, g_c_scaled, b_c_scaled],
            &LINRGB_FROM_SCALED_DISCOUNT,
        );
        if linrgb[0] < 0.0 || linrgb[1] < 0.0 || linrgb[2] < 0.0 {
            return None;
        }
        let k_r = Y_FROM_LINRGB[0];
        let k_g = Y_FROM_LINRGB[1];
        let k_b = Y_FROM_LINRGB[2];
        let fnj = k_r * linrgb[0] + k_g * linrgb[1] + k_b * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }
        if iteration_round == 4 || (fnj - y).abs() < 0.002 {
            if linrgb[0] > 100.01 || linrgb[1] > 100.01 || linrgb[2] > 100.01 {
                return None;
            }
            return Some(argb_from_linrgb(linrgb));
        }
        // Newton step on J; the 2·fnj denominator reflects J ∝ √Y.
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn channel_close(a: Argb, b: Argb) -> bool {
        i32::from(a.red()).abs_diff(i32::from(b.red())) <= 1
            && i32::from(a.green()).abs_diff(i32::from(b.green())) <= 1
            && i32::from(a.blue()).abs_diff(i32::from(b.blue())) <= 1
    }

    #[test]
    fn degenerate_chroma_is_neutral_gray() {
        for hue in [0.0, 90.0, 180.0, 271.5] {
            for tone in [0.0, 25.0, 50.0, 75.0, 100.0] {
                assert_eq!(
                    solve_to_argb(hue, 0.0, tone),
                    argb_from_lstar(tone),
                    "hue {hue} tone {tone}"
                );
            }
        }
    }

    #[test]
    fn extreme_tones_are_black_and_white() {
        assert_eq!(solve_to_argb(120.0, 50.0, 0.0), Argb::BLACK);
        assert_eq!(solve_to_argb(120.0, 50.0, 100.0), Argb::WHITE);
    }

    #[test]
    fn primaries_round_trip_within_one_per_channel() {
        for argb in [
            Argb::from_u32(0xFFFF_0000),
            Argb::from_u32(0xFF00_FF00),
            Argb::from_u32(0xFF00_00FF),
            Argb::from_u32(0xFFFF_FF00),
            Argb::from_u32(0xFF00_FFFF),
            Argb::from_u32(0xFFFF_00FF),
        ] {
            let hct = Hct::from_argb(argb);
            let resolved = solve_to_argb(hct.hue(), hct.chroma(), hct.tone());
            assert!(
                channel_close(argb, resolved),
                "{argb:?} resolved to {resolved:?}"
            );
        }
    }

    #[test]
    fn solved_color_preserves_hue_and_tone() {
        // Chroma 120 at tone 50 is far outside the gamut for most hues;
        // hue and tone must still hold while chroma is reduced.
        for hue in (15..360).step_by(30) {
            let hct = Hct::new(f64::from(hue), 120.0, 50.0);
            assert!(
                crate::math::difference_degrees(hct.hue(), f64::from(hue)) < 4.0,
                "hue {hue} drifted to {}",
                hct.hue()
            );
            assert!((hct.tone() - 50.0).abs() < 0.5, "tone drifted to {}", hct.tone());
        }
    }

    #[test]
    fn requested_chroma_is_met_when_in_gamut() {
        // Modest chroma well inside the gamut should be delivered.
        let hct = Hct::new(120.0, 20.0, 50.0);
        assert!((hct.chroma() - 20.0).abs() < 1.0, "chroma = {}", hct.chroma());
    }

    #[test]
    fn with_component_recomputes_everything() {
        let base = Hct::new(27.0, 40.0, 60.0);
        let rotated = base.with_hue(200.0);
        assert!(crate::math::difference_degrees(rotated.hue(), 200.0) < 2.0);
        assert!((rotated.tone() - base.tone()).abs() < 1.0);

        let darkened = base.with_tone(20.0);
        assert!((darkened.tone() - 20.0).abs() < 0.5);
        assert!(crate::math::difference_degrees(darkened.hue(), base.hue()) < 2.0);
    }

    #[test]
    fn equality_is_by_solved_color() {
        let a = Hct::new(27.0, 40.0, 60.0);
        let b = Hct::from_argb(a.to_argb());
        assert_eq!(a, b);
    }

    #[test]
    fn solver_matrices_are_mutual_inverses() {
        for row in 0..3 {
            let product = matrix_multiply(
                [
                    SCALED_DISCOUNT_FROM_LINRGB[0][row],
                    SCALED_DISCOUNT_FROM_LINRGB[1][row],
                    SCALED_DISCOUNT_FROM_LINRGB[2][row],
                ],
                &LINRGB_FROM_SCALED_DISCOUNT,
            );
            for (column, value) in product.iter().enumerate() {
                let expected = if row == column { 1.0 } else { 0.0 };
                assert!(
                    (value - expected).abs() < 1e-3,
                    "product[{row}][{column}] = {value}"
                );
            }
        }
    }

    #[test]
    fn critical_planes_match_true_delinearization() {
        // Plane i must sit exactly at byte midpoint i + 0.5.
        for i in (0..255).step_by(16) {
            let plane = CRITICAL_PLANES[i];
            #[allow(clippy::cast_precision_loss)]
            let expected = i as f64 + 0.5;
            assert!(
                (true_delinearized(plane) - expected).abs() < 1e-9,
                "plane {i}"
            );
        }
    }

    proptest! {
        // Full solve round-trip: any displayable color, re-solved from
        // its HCT coordinates, lands within one step per channel.
        #[test]
        fn round_trip_any_color(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let argb = Argb::from_rgb(r, g, b);
            let hct = Hct::from_argb(argb);
            let resolved = solve_to_argb(hct.hue(), hct.chroma(), hct.tone());
            prop_assert!(channel_close(argb, resolved), "{:?} -> {:?}", argb, resolved);
        }

        // Tone always survives the solve exactly (within L* rounding).
        #[test]
        fn tone_is_always_honored(hue in 0.0f64..360.0, chroma in 0.0f64..140.0, tone in 1.0f64..99.0) {
            let solved = Hct::new(hue, chroma, tone);
            prop_assert!((solved.tone() - tone).abs() < 0.5,
                "requested tone {} got {}", tone, solved.tone());
        }
    }
}
