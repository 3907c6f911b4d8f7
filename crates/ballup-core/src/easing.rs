//! Pure easing helpers for the node animation
//!
//! A single progress value in [0, 1] is split into `n` equal sub-segments so
//! that several sub-animations can run one after another, and shaped with a
//! sine curve instead of moving linearly.

use std::f64::consts::PI;

/// Reciprocal of a segment count
#[inline]
pub fn inverse(n: u32) -> f64 {
    1.0 / n as f64
}

/// Shift `x` down by the i-th of `n` equal sub-fractions, floored at 0
#[inline]
pub fn max_scale(x: f64, i: u32, n: u32) -> f64 {
    (x - i as f64 * inverse(n)).max(0.0)
}

/// Map the i-th sub-segment of `x` onto its own 0 → 1 progress
///
/// As `x` sweeps 0 → 1, segment `i` stays at 0 until `x` reaches `i/n`,
/// rises linearly, and saturates at 1 once `x` reaches `(i+1)/n`.
#[inline]
pub fn divide_scale(x: f64, i: u32, n: u32) -> f64 {
    inverse(n).min(max_scale(x, i, n)) * n as f64
}

/// Sine easing: `sin(π * x / n)`
///
/// For `n = 1` this is a 0 → 1 → 0 hump over `x` in [0, 1]; for `n = 2` it
/// is an ease-out from 0 to 1.
#[inline]
pub fn sinify(x: f64, n: u32) -> f64 {
    (PI * inverse(n) * x).sin()
}
