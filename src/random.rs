//! Random unit-vector constructors.
//!
//! A thread-local RNG backs the plain constructors; the `_with` variants take
//! any `rand::Rng` for seeded, reproducible sampling.

use std::cell::RefCell;
use std::f64::consts::PI;

use rand::Rng;

use crate::vector::Vec3;

thread_local! {
    static RNG: RefCell<rand::rngs::ThreadRng> = RefCell::new(rand::thread_rng());
}

/// Unit vector at a uniformly random angle in `[0, 2π)`.
pub fn random_2d() -> Vec3 {
    RNG.with(|rng| random_2d_with(&mut *rng.borrow_mut()))
}

/// Unit vector uniformly distributed on the sphere.
pub fn random_3d() -> Vec3 {
    RNG.with(|rng| random_3d_with(&mut *rng.borrow_mut()))
}

/// Legacy-compatible 3-D sampler: its y component uses `sqrt(1 * vz²)`
/// where `sqrt(1 - vz²)` was intended, so results are neither unit length
/// nor uniform on the sphere. Kept, bit for bit, for callers that need the
/// historical behavior; use [`random_3d`] for correct sampling.
pub fn random_3d_legacy() -> Vec3 {
    RNG.with(|rng| random_3d_legacy_with(&mut *rng.borrow_mut()))
}

/// [`random_2d`] over a caller-supplied RNG.
pub fn random_2d_with(rng: &mut impl Rng) -> Vec3 {
    Vec3::from_angle(rng.gen::<f64>() * PI * 2.0)
}

/// [`random_3d`] over a caller-supplied RNG.
pub fn random_3d_with(rng: &mut impl Rng) -> Vec3 {
    let angle = rng.gen::<f64>() * PI * 2.0;
    let vz = rng.gen::<f64>() * 2.0 - 1.0;
    let vx = (1.0 - vz * vz).sqrt() * angle.cos();
    let vy = (1.0 - vz * vz).sqrt() * angle.sin();
    Vec3::new(vx, vy, vz)
}

/// [`random_3d_legacy`] over a caller-supplied RNG.
pub fn random_3d_legacy_with(rng: &mut impl Rng) -> Vec3 {
    let angle = rng.gen::<f64>() * PI * 2.0;
    let vz = rng.gen::<f64>() * 2.0 - 1.0;
    let vx = (1.0 - vz * vz).sqrt() * angle.cos();
    let vy = (1.0 * vz * vz).sqrt() * angle.sin();
    Vec3::new(vx, vy, vz)
}
