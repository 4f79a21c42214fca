//! src/ops/angle.rs
//! Angle between two vectors

use std::f64::consts::PI;

use crate::vector::Vec3;

/// Angle between `a` and `b` in radians, via `acos(dot / (|a|·|b|))`.
///
/// If either operand is exactly the zero vector the result is `0` rather
/// than NaN. The cosine ratio is clamped before `acos`: at or below `-1`
/// the result is `π`, at or above `1` it is `0`.
pub fn angle_between(a: Vec3, b: Vec3) -> f64 {
    match cosine(a, b) {
        None => 0.0,
        Some(amt) if amt <= -1.0 => PI,
        Some(amt) if amt >= 1.0 => 0.0,
        Some(amt) => amt.acos(),
    }
}

/// Legacy-compatible variant with the inverted boundary clamp: a ratio at
/// or below `-1` returns `0` and at or above `1` returns `π`. Interior
/// values are identical to [`angle_between`]. Kept for callers that need
/// the historical behavior.
pub fn angle_between_legacy(a: Vec3, b: Vec3) -> f64 {
    match cosine(a, b) {
        None => 0.0,
        Some(amt) if amt <= -1.0 => 0.0,
        Some(amt) if amt >= 1.0 => PI,
        Some(amt) => amt.acos(),
    }
}

// None marks a zero-vector operand.
fn cosine(a: Vec3, b: Vec3) -> Option<f64> {
    if a == Vec3::zero() || b == Vec3::zero() {
        return None;
    }
    Some(a.dot(&b) / (a.mag() * b.mag()))
}
