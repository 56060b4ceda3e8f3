// SPDX-License-Identifier: MIT
//
// Angle and matrix helpers shared across the colorimetry pipeline.

/// Sign of `value`: -1.0, 0.0, or 1.0.
///
/// `f64::signum` returns ±1.0 for ±0.0, which is wrong for the
/// chromatic-adaptation formulas (zero input must stay zero).
#[inline]
#[must_use]
pub fn signum(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else if value == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Linear interpolation: `start` at `amount == 0`, `stop` at `amount == 1`.
#[inline]
#[must_use]
pub fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Clamp an integer-valued tone/angle into `[min, max]`.
#[inline]
#[must_use]
pub fn clamp_double(min: f64, max: f64, input: f64) -> f64 {
    if input < min {
        min
    } else if input > max {
        max
    } else {
        input
    }
}

/// Normalize a hue angle in degrees into `[0, 360)`.
#[inline]
#[must_use]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Normalize an integer hue angle into `[0, 360)`.
#[inline]
#[must_use]
pub const fn sanitize_degrees_int(degrees: i32) -> i32 {
    let degrees = degrees % 360;
    if degrees < 0 { degrees + 360 } else { degrees }
}

/// Shortest-arc distance between two hue angles, in degrees (0–180).
#[inline]
#[must_use]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Sign of the shortest rotation from hue `from` to hue `to`.
///
/// Returns 1.0 for counter-clockwise (increasing hue), -1.0 for
/// clockwise. A 180° separation rotates counter-clockwise by convention.
#[inline]
#[must_use]
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing_difference = sanitize_degrees(to - from);
    if increasing_difference <= 180.0 { 1.0 } else { -1.0 }
}

/// Multiply a row vector by a 3×3 matrix (row-major).
#[inline]
#[must_use]
pub fn matrix_multiply(row: [f64; 3], matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    let a = row[0] * matrix[0][0] + row[1] * matrix[0][1] + row[2] * matrix[0][2];
    let b = row[0] * matrix[1][0] + row[1] * matrix[1][1] + row[2] * matrix[1][2];
    let c = row[0] * matrix[2][0] + row[1] * matrix[2][1] + row[2] * matrix[2][2];
    [a, b, c]
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signum_zero_is_zero() {
        assert_eq!(signum(0.0), 0.0);
        assert_eq!(signum(-0.0), 0.0);
        assert_eq!(signum(3.5), 1.0);
        assert_eq!(signum(-0.001), -1.0);
    }

    #[test]
    fn sanitize_wraps_both_directions() {
        assert_eq!(sanitize_degrees(0.0), 0.0);
        assert_eq!(sanitize_degrees(360.0), 0.0);
        assert_eq!(sanitize_degrees(-30.0), 330.0);
        assert_eq!(sanitize_degrees(725.0), 5.0);
        assert_eq!(sanitize_degrees_int(-1), 359);
        assert_eq!(sanitize_degrees_int(720), 0);
    }

    #[test]
    fn difference_is_shortest_arc() {
        assert_eq!(difference_degrees(10.0, 350.0), 20.0);
        assert_eq!(difference_degrees(0.0, 180.0), 180.0);
        assert_eq!(difference_degrees(90.0, 90.0), 0.0);
    }

    #[test]
    fn rotation_prefers_short_way_round() {
        assert_eq!(rotation_direction(10.0, 350.0), -1.0);
        assert_eq!(rotation_direction(350.0, 10.0), 1.0);
        assert_eq!(rotation_direction(0.0, 180.0), 1.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn matrix_multiply_identity() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(matrix_multiply([3.0, 5.0, 7.0], &identity), [3.0, 5.0, 7.0]);
    }
}
