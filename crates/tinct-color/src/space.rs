// SPDX-License-Identifier: MIT
//
// Scalar and matrix color-space conversions: sRGB ↔ linear RGB ↔ CIE
// XYZ ↔ L*a*b*.
//
// Linear channel values are scaled 0–100 (not 0–1) throughout, matching
// the reference pipeline; the Y of XYZ doubles as relative luminance on
// the same scale. All coefficients are the exact reference values —
// do not "improve" their precision.

use crate::argb::Argb;
use crate::math::matrix_multiply;

/// Row-major sRGB (linear, 0–100) → CIE XYZ under D65.
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

/// Row-major CIE XYZ → sRGB (linear, 0–100) under D65.
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2413774792388685, -1.5376652402851851, -0.49885366846268053],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
];

/// The D65 standard-illuminant white point, Y = 100.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

// ─── Gamma curve ─────────────────────────────────────────────────────────────

/// Linearize one 8-bit sRGB component to 0–100.
///
/// The standard sRGB piecewise curve: linear segment below the 0.040449936
/// encoded threshold, power 2.4 above.
#[must_use]
pub fn linearized(rgb_component: u8) -> f64 {
    let normalized = f64::from(rgb_component) / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Delinearize one linear component (0–100) to the nearest 8-bit value.
///
/// Rounds to the nearest byte and clamps to [0, 255]; this is the only
/// place the pipeline quantizes.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn delinearized(rgb_component: f64) -> u8 {
    let normalized = rgb_component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    (delinearized * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Delinearize without rounding: linear 0–100 in, continuous 0–255 out.
///
/// The HCT solver bisects against these unquantized byte positions
/// ("critical planes").
#[must_use]
pub fn true_delinearized(rgb_component: f64) -> f64 {
    let normalized = rgb_component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    delinearized * 255.0
}

// ─── XYZ ─────────────────────────────────────────────────────────────────────

/// Convert a packed color to CIE XYZ (D65, Y scaled 0–100).
#[must_use]
pub fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    let r = linearized(argb.red());
    let g = linearized(argb.green());
    let b = linearized(argb.blue());
    matrix_multiply([r, g, b], &SRGB_TO_XYZ)
}

/// Convert CIE XYZ (D65) to the nearest packed sRGB color.
#[must_use]
pub fn argb_from_xyz(x: f64, y: f64, z: f64) -> Argb {
    let [linear_r, linear_g, linear_b] = matrix_multiply([x, y, z], &XYZ_TO_SRGB);
    Argb::from_rgb(
        delinearized(linear_r),
        delinearized(linear_g),
        delinearized(linear_b),
    )
}

/// Convert a linear RGB triple (0–100 per channel) to a packed color.
#[must_use]
pub fn argb_from_linrgb(linrgb: [f64; 3]) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

// ─── L*a*b* ──────────────────────────────────────────────────────────────────

// CIE 1976 constants: ε = (6/29)³, κ = (29/3)³.
const E: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// The CIE 1976 `f(t)` function: cube root above ε, linear below.
#[must_use]
pub fn lab_f(t: f64) -> f64 {
    if t > E {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Inverse of [`lab_f`].
#[must_use]
pub fn lab_inv_f(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > E {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// L* of a relative luminance Y (0–100 in, 0–100 out).
#[must_use]
pub fn lstar_from_y(y: f64) -> f64 {
    116.0 * lab_f(y / 100.0) - 16.0
}

/// Relative luminance Y of an L* value (both 0–100).
#[must_use]
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_inv_f((lstar + 16.0) / 116.0)
}

/// L* (perceptual lightness, "tone") of a packed color.
#[must_use]
pub fn lstar_from_argb(argb: Argb) -> f64 {
    let y = xyz_from_argb(argb)[1];
    116.0 * lab_f(y / 100.0) - 16.0
}

/// The neutral gray with the given L* — every channel equal.
#[must_use]
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let y = y_from_lstar(lstar);
    let component = delinearized(y);
    Argb::from_rgb(component, component, component)
}

/// CIE L*a*b* coordinates of a packed color (D65 white).
#[must_use]
pub fn lab_from_argb(argb: Argb) -> [f64; 3] {
    let [x, y, z] = xyz_from_argb(argb);
    let fx = lab_f(x / WHITE_POINT_D65[0]);
    let fy = lab_f(y / WHITE_POINT_D65[1]);
    let fz = lab_f(z / WHITE_POINT_D65[2]);
    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);
    [l, a, b]
}

/// The nearest packed color for CIE L*a*b* coordinates (D65 white).
#[must_use]
pub fn argb_from_lab(l: f64, a: f64, b: f64) -> Argb {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    let x = lab_inv_f(fx) * WHITE_POINT_D65[0];
    let y = lab_inv_f(fy) * WHITE_POINT_D65[1];
    let z = lab_inv_f(fz) * WHITE_POINT_D65[2];
    argb_from_xyz(x, y, z)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
