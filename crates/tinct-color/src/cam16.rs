// SPDX-License-Identifier: MIT
//
// CAM16 forward appearance model.
//
// Given a color and viewing conditions, predict its perceived
// attributes: hue, chroma, lightness (J), brightness (Q), colorfulness
// (M), saturation (s), and the CAM16-UCS cartesian coordinates used
// for color-difference math. This direction is closed-form; inversion
// lives in `hct`.

use crate::argb::Argb;
use crate::math::signum;
use crate::space::xyz_from_argb;
use crate::viewing::ViewingConditions;

/// A color's CAM16 appearance under some viewing conditions.
#[derive(Debug, Clone, Copy)]
pub struct Cam16 {
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f64,
    /// Chroma — colorfulness relative to white's brightness.
    pub chroma: f64,
    /// Lightness J.
    pub j: f64,
    /// Brightness Q.
    pub q: f64,
    /// Colorfulness M.
    pub m: f64,
    /// Saturation s.
    pub s: f64,
    /// CAM16-UCS J* coordinate.
    pub jstar: f64,
    /// CAM16-UCS a* coordinate.
    pub astar: f64,
    /// CAM16-UCS b* coordinate.
    pub bstar: f64,
}

impl Cam16 {
    /// Appearance of `argb` under the standard UI viewing conditions.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in_viewing_conditions(argb, ViewingConditions::standard())
    }

    /// Appearance of `argb` under explicit viewing conditions.
    #[must_use]
    pub fn from_argb_in_viewing_conditions(argb: Argb, vc: &ViewingConditions) -> Self {
        let [x, y, z] = xyz_from_argb(argb);
        Self::from_xyz_in_viewing_conditions(x, y, z, vc)
    }

    /// Appearance of an XYZ triple (D65, Y scaled 0–100).
    #[must_use]
    pub fn from_xyz_in_viewing_conditions(x: f64, y: f64, z: f64, vc: &ViewingConditions) -> Self {
        // Cone responses (CAT16), then discounted by degree of adaptation.
        let r_t = x * 0.401288 + y * 0.650173 + z * -0.051461;
        let g_t = x * -0.250268 + y * 1.204414 + z * 0.045854;
        let b_t = x * -0.002079 + y * 0.048952 + z * 0.953127;

        let r_d = vc.rgb_d[0] * r_t;
        let g_d = vc.rgb_d[1] * g_t;
        let b_d = vc.rgb_d[2] * b_t;

        // Signed-power chromatic adaptation: 400·x^0.42 / (x^0.42 + 27.13).
        let r_af = (vc.fl * r_d.abs() / 100.0).powf(0.42);
        let g_af = (vc.fl * g_d.abs() / 100.0).powf(0.42);
        let b_af = (vc.fl * b_d.abs() / 100.0).powf(0.42);
        let r_a = signum(r_d) * 400.0 * r_af / (r_af + 27.13);
        let g_a = signum(g_d) * 400.0 * g_af / (g_af + 27.13);
        let b_a = signum(b_d) * 400.0 * b_af / (b_af + 27.13);

        // Opponent dimensions.
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;

        // Auxiliary components.
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        // Hue.
        let atan_degrees = b.atan2(a).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };
        let hue_radians = hue.to_radians();

        // Achromatic response and lightness.
        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = (4.0 / vc.c) * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        // Chroma via the eccentricity-weighted magnitude t.
        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29f64.powf(vc.n)).powf(0.73) * t.powf(0.9);

        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();

        // CAM16-UCS.
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (1.0 + 0.0228 * m).ln();
        let astar = mstar * hue_radians.cos();
        let bstar = mstar * hue_radians.sin();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// CAM16-UCS ΔE' to another appearance.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * d_e_prime.powf(0.63)
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
    fn red_appearance() {
        let cam = Cam16::from_argb(Argb::from_u32(0xFFFF_0000));
        assert!(approx(cam.hue, 27.41, 0.1), "hue = {}", cam.hue);
        assert!(approx(cam.chroma, 113.36, 0.1), "chroma = {}", cam.chroma);
        assert!(approx(cam.j, 46.45, 0.1), "j = {}", cam.j);
    }

    #[test]
    fn green_appearance() {
        let cam = Cam16::from_argb(Argb::from_u32(0xFF00_FF00));
        assert!(approx(cam.hue, 142.14, 0.5), "hue = {}", cam.hue);
        assert!(approx(cam.j, 79.33, 0.5), "j = {}", cam.j);
    }

    #[test]
    fn blue_appearance() {
        let cam = Cam16::from_argb(Argb::from_u32(0xFF00_00FF));
        assert!(approx(cam.hue, 282.79, 0.5), "hue = {}", cam.hue);
        assert!(approx(cam.j, 25.46, 0.5), "j = {}", cam.j);
    }

    #[test]
    fn white_is_nearly_achromatic_and_bright() {
        let cam = Cam16::from_argb(Argb::WHITE);
        assert!(cam.chroma < 3.0, "chroma = {}", cam.chroma);
        assert!(approx(cam.j, 100.0, 0.5), "j = {}", cam.j);
    }

    #[test]
    fn black_has_zero_lightness() {
        let cam = Cam16::from_argb(Argb::BLACK);
        assert!(approx(cam.j, 0.0, 1e-6), "j = {}", cam.j);
        assert!(approx(cam.q, 0.0, 1e-6), "q = {}", cam.q);
    }

    #[test]
    fn grays_have_negligible_chroma() {
        // Grays keep a residual chroma under the default viewing
        // conditions (0x555555 sits near 1.5), so "negligible" means
        // well under any accent chroma, not zero.
        for byte in [0x11u8, 0x55, 0x99, 0xDD] {
            let cam = Cam16::from_argb(Argb::from_rgb(byte, byte, byte));
            assert!(cam.chroma < 3.0, "gray {byte:#X} chroma = {}", cam.chroma);
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let cam = Cam16::from_argb(Argb::from_u32(0xFF12_9ACD));
        assert!(approx(cam.distance(&cam), 0.0, 1e-9));
    }

    #[test]
    fn distance_grows_with_separation() {
        let red = Cam16::from_argb(Argb::from_u32(0xFFFF_0000));
        let dark_red = Cam16::from_argb(Argb::from_u32(0xFFCC_0000));
        let blue = Cam16::from_argb(Argb::from_u32(0xFF00_00FF));
        assert!(red.distance(&dark_red) < red.distance(&blue));
    }
}
