//! Heterogeneous scalar input, reduced to `f64`.
//!
//! The core [`Vec3`] API takes plain doubles. Callers fed by dynamic input
//! (mixed integer widths, either float width, or decimal numeric strings) go
//! through this adapter instead. The infallible path never errors: it always
//! yields an `f64`, with unparsable strings coercing to `0.0`. Callers that
//! want strict validation use [`try_to_f64`].

use thiserror::Error;

use crate::vector::Vec3;

/// A value that reduces to an `f64` without error.
///
/// Implemented for every common integer width, both float widths, and the
/// string forms. Anything else is rejected at compile time.
pub trait Coerce {
    fn coerce(&self) -> f64;
}

macro_rules! coerce_via_cast {
    ($($t:ty),*) => {
        $(impl Coerce for $t {
            fn coerce(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

coerce_via_cast!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Coerce for &str {
    /// Standard decimal parse; unparsable input coerces to `0.0`.
    fn coerce(&self) -> f64 {
        self.parse::<f64>().unwrap_or(0.0)
    }
}

impl Coerce for String {
    fn coerce(&self) -> f64 {
        self.as_str().coerce()
    }
}

/// Reduce any accepted scalar representation to `f64`. Never fails.
pub fn to_f64(value: impl Coerce) -> f64 {
    value.coerce()
}

/// Raised only by the strict string path, [`try_to_f64`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoerceError {
    #[error("not a decimal number: {0:?}")]
    Unparsable(String),
}

/// Strict variant of the string coercion for callers that want parse
/// failures surfaced instead of defaulting to zero.
pub fn try_to_f64(s: &str) -> Result<f64, CoerceError> {
    s.parse::<f64>()
        .map_err(|_| CoerceError::Unparsable(s.to_owned()))
}

/// 2-D constructor over coerced input; `z` is set to 0.
pub fn from_coerced(x: impl Coerce, y: impl Coerce) -> Vec3 {
    Vec3::new_2d(x.coerce(), y.coerce())
}

/// 3-D constructor over coerced input.
pub fn from_coerced_3d(x: impl Coerce, y: impl Coerce, z: impl Coerce) -> Vec3 {
    Vec3::new(x.coerce(), y.coerce(), z.coerce())
}

/// `v` scaled by a coerced factor.
pub fn scaled(v: Vec3, s: impl Coerce) -> Vec3 {
    v * s.coerce()
}

/// [`lerp`](crate::ops::interpolation::lerp) with a coerced amount.
pub fn lerp_coerced(a: Vec3, b: Vec3, amt: impl Coerce) -> Vec3 {
    crate::ops::interpolation::lerp(a, b, amt.coerce())
}
