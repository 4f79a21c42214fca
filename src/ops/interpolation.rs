//! src/ops/interpolation.rs
//! Linear interpolation between two `Vec3`

use crate::vector::Vec3;

/// Linear interpolation from `a` to `b` by `amt`, per axis: `a + (b-a)*amt`.
///
/// `amt` is not clamped; values outside `[0, 1]` extrapolate.
pub fn lerp(a: Vec3, b: Vec3, amt: f64) -> Vec3 {
    Vec3::new(
        lerp_scalar(a.x, b.x, amt),
        lerp_scalar(a.y, b.y, amt),
        lerp_scalar(a.z, b.z, amt),
    )
}

fn lerp_scalar(a: f64, b: f64, amt: f64) -> f64 {
    a + (b - a) * amt
}
