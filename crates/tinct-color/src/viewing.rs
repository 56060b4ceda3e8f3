// SPDX-License-Identifier: MIT
//
// CAM16 viewing conditions — the precomputed constants every
// appearance-model conversion shares.
//
// CAM16 predicts what a color *looks like* given its surroundings: the
// adapting field luminance, the background lightness, and how dim the
// surround is. For UI work one fixed environment covers everything, so
// a single default instance is built lazily and shared process-wide.

use std::sync::LazyLock;

use crate::math::lerp;
use crate::space::{WHITE_POINT_D65, y_from_lstar};

/// Derived viewing-environment constants for CAM16.
///
/// Immutable after construction. The field names follow the CAM16
/// paper; they are intermediate quantities with no friendlier names.
#[derive(Debug, Clone, Copy)]
pub struct ViewingConditions {
    /// Background relative luminance over white-point luminance.
    pub n: f64,
    /// Achromatic response to the white point.
    pub aw: f64,
    /// Background induction factor.
    pub nbb: f64,
    /// Chromatic induction factor.
    pub ncb: f64,
    /// Surround exponential nonlinearity.
    pub c: f64,
    /// Chromatic induction factor of the surround.
    pub nc: f64,
    /// Degree-of-adaptation discount per cone channel.
    pub rgb_d: [f64; 3],
    /// Luminance-level adaptation factor.
    pub fl: f64,
    /// `fl.powf(0.25)`, cached (used by every chroma conversion).
    pub fl_root: f64,
    /// Lightness base exponent.
    pub z: f64,
}

/// XYZ → CAM16 pre-adaptation RGB (the CAT16 matrix).
pub const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// CAM16 pre-adaptation RGB → XYZ.
pub const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.8620678, -1.0112547, 0.14918678],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.0499644],
];

impl ViewingConditions {
    /// Compute viewing conditions from environment parameters.
    ///
    /// - `white_point`: XYZ of the reference white (Y = 100)
    /// - `adapting_luminance`: cd/m² of the adapting field (> 0)
    /// - `background_lstar`: L* of the background, 0–100
    /// - `surround`: 0 (dark) to 2 (average)
    /// - `discounting_illuminant`: whether the eye fully discounts the
    ///   illuminant color (true for self-luminous displays is *not*
    ///   assumed; the reference keeps this false)
    #[must_use]
    pub fn new(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        // White point through the CAT16 matrix.
        let [x, y, z] = white_point;
        let r_w = x * 0.401288 + y * 0.650173 + z * -0.051461;
        let g_w = x * -0.250268 + y * 1.204414 + z * 0.045854;
        let b_w = x * -0.002079 + y * 0.048952 + z * 0.953127;

        // Surround factors. f interpolates dim → average.
        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };

        // Degree of adaptation.
        let mut d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        d = d.clamp(0.0, 1.0);

        let nc = f;
        let rgb_d = [
            d * (100.0 / r_w) + 1.0 - d,
            d * (100.0 / g_w) + 1.0 - d,
            d * (100.0 / b_w) + 1.0 - d,
        ];

        // Luminance-level adaptation.
        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance
            + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point[1];
        let z_exp = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        // Achromatic response to white.
        let rgb_a_factors = [
            (fl * rgb_d[0] * r_w / 100.0).powf(0.42),
            (fl * rgb_d[1] * g_w / 100.0).powf(0.42),
            (fl * rgb_d[2] * b_w / 100.0).powf(0.42),
        ];
        let rgb_a = [
            400.0 * rgb_a_factors[0] / (rgb_a_factors[0] + 27.13),
            400.0 * rgb_a_factors[1] / (rgb_a_factors[1] + 27.13),
            400.0 * rgb_a_factors[2] / (rgb_a_factors[2] + 27.13),
        ];
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z: z_exp,
        }
    }

    /// The process-wide default: sRGB-typical UI viewing.
    ///
    /// D65 white, adapting luminance `200/π · Y(L*=50)/100`, mid-gray
    /// background, average surround, no illuminant discounting. Built
    /// once on first use and never mutated.
    #[must_use]
    pub fn standard() -> &'static Self {
        static DEFAULT: LazyLock<ViewingConditions> = LazyLock::new(|| {
            ViewingConditions::new(
                WHITE_POINT_D65,
                200.0 / std::f64::consts::PI * y_from_lstar(50.0) / 100.0,
                50.0,
                2.0,
                false,
            )
        });
        &DEFAULT
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn standard_conditions_match_reference() {
        let vc = ViewingConditions::standard();
        // Reference values for the default sRGB environment.
        assert!(approx(vc.n, 0.184186, 1e-5), "n = {}", vc.n);
        assert!(approx(vc.aw, 29.981, 1e-3), "aw = {}", vc.aw);
        assert!(approx(vc.nbb, 1.0169, 1e-3), "nbb = {}", vc.nbb);
        assert!(approx(vc.ncb, vc.nbb, 1e-12));
        assert!(approx(vc.c, 0.69, 1e-9), "c = {}", vc.c);
        assert!(approx(vc.nc, 1.0, 1e-9), "nc = {}", vc.nc);
        assert!(approx(vc.fl, 0.388, 1e-3), "fl = {}", vc.fl);
        assert!(approx(vc.z, 1.909, 1e-3), "z = {}", vc.z);
    }

    #[test]
    fn standard_is_shared_instance() {
        let a: *const ViewingConditions = ViewingConditions::standard();
        let b: *const ViewingConditions = ViewingConditions::standard();
        assert_eq!(a, b);
    }

    #[test]
    fn discounting_fully_adapts() {
        let vc = ViewingConditions::new(WHITE_POINT_D65, 11.72, 50.0, 2.0, true);
        // With full discounting, rgb_d scales cones exactly to the white point.
        for d in vc.rgb_d {
            assert!(d > 0.0);
        }
        let white_r =
            WHITE_POINT_D65[0] * 0.401288 + WHITE_POINT_D65[1] * 0.650173
                - WHITE_POINT_D65[2] * 0.051461;
        assert!(approx(vc.rgb_d[0] * white_r, 100.0, 1e-6));
    }

    #[test]
    fn dim_surround_lowers_c() {
        let dim = ViewingConditions::new(WHITE_POINT_D65, 11.72, 50.0, 0.0, false);
        let avg = ViewingConditions::new(WHITE_POINT_D65, 11.72, 50.0, 2.0, false);
        assert!(dim.c < avg.c);
    }
}
