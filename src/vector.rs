// src/vector.rs

use std::fmt;

/// A 3-D Euclidean vector. A 2-D vector is a `Vec3` with `z == 0`.
///
/// Plain copyable value: any `f64` triple (NaN and infinities included) is a
/// legal instance. No operation here errors or panics; degenerate inputs
/// propagate IEEE-754 special values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    /// 2-D constructor; `z` is set to 0.
    pub fn new_2d(x: f64, y: f64) -> Self { Self { x, y, z: 0.0 } }

    pub fn zero() -> Self { Self { x: 0.0, y: 0.0, z: 0.0 } }

    /// Unit vector at `angle` radians from the positive x axis.
    pub fn from_angle(angle: f64) -> Self {
        Self::new_2d(angle.cos(), angle.sin())
    }

    // ---- in-place operations ----

    /// Component-wise add, in place.
    pub fn add(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }

    /// Component-wise subtract, in place.
    pub fn sub(&mut self, other: Vec3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }

    /// Scale every component by `s`, in place.
    pub fn mult(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }

    /// Divide every component by `s`, in place. No zero guard: `s == 0`
    /// yields infinite or NaN components.
    pub fn div(&mut self, s: f64) {
        self.x /= s;
        self.y /= s;
        self.z /= s;
    }

    /// Scale to unit length. The zero vector normalizes to all-NaN.
    pub fn normalize(&mut self) {
        let m = self.mag();
        self.div(m);
    }

    /// Clamp the magnitude to at most `max`. Compares squared magnitudes so
    /// the under-limit path takes no square root.
    pub fn limit(&mut self, max: f64) {
        if self.mag_sq() > max * max {
            self.normalize();
            self.mult(max);
        }
    }

    /// Set the magnitude to `mag`, keeping direction.
    pub fn set_mag(&mut self, mag: f64) {
        self.normalize();
        self.mult(mag);
    }

    /// Rotate in the XY plane by `angle` radians; `z` is untouched.
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let x = self.x;
        self.x = x * cos - self.y * sin;
        self.y = x * sin + self.y * cos;
    }

    /// Legacy-compatible rotation: reproduces, bit for bit, a historical
    /// defect in which the new y is computed from the already-rotated x.
    /// Use [`rotate`](Self::rotate) for the correct rotation.
    pub fn rotate_legacy(&mut self, angle: f64) {
        let t = self.x;
        self.x = self.x * angle.cos() - self.y * angle.sin();
        self.y = t * angle.sin() - self.x * angle.cos();
    }

    // ---- value-returning operations ----

    /// Euclidean norm.
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Squared norm. Use for comparisons to skip the square root.
    pub fn mag_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance to `other`.
    pub fn dist(&self, other: &Vec3) -> f64 {
        self.dist_sq(other).sqrt()
    }

    /// Squared distance to `other`.
    pub fn dist_sq(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// 3-D cross product. For 2-D inputs (z = 0) the result has zero x/y and
    /// the 2-D cross magnitude in z.
    pub fn cross(&self, other: &Vec3) -> Self {
        Self {
            x: self.y * other.z - other.y * self.z,
            y: self.z * other.x - other.z * self.x,
            z: self.x * other.y - other.x * self.y,
        }
    }

    /// Angle from the positive x axis, `atan2(y, x)`, in `(-π, π]`.
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Pure operator forms are copy + in-place op; the arithmetic lives in one
// place only.

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        let mut out = self;
        Vec3::add(&mut out, rhs);
        out
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        let mut out = self;
        Vec3::sub(&mut out, rhs);
        out
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        let mut out = self;
        out.mult(rhs);
        out
    }
}

// scalar * Vec3
impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, rhs: f64) -> Vec3 {
        let mut out = self;
        Vec3::div(&mut out, rhs);
        out
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self * -1.0
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.add(rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.sub(rhs);
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.mult(rhs);
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        self.div(rhs);
    }
}

/// A tiny wrapper for printing a Vec3 rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vec3, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(
            f,
            "Vec3 {{ x: {x:.dec$}, y: {y:.dec$}, z: {z:.dec$} }}",
            x = v.x,
            y = v.y,
            z = v.z,
            dec = dec
        )
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vec3` for pretty-printing with `decimals` digits.
    pub fn new(v: &'a Vec3, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
