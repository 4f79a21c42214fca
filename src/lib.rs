#![doc = include_str!("../README.md")]

pub mod coerce;
pub mod random;
pub mod vector;

pub mod ops;

pub use vector::{Rounded, Vec3};

pub use crate::coerce::{to_f64, try_to_f64, Coerce, CoerceError};
pub use crate::ops::angle::{angle_between, angle_between_legacy};
pub use crate::ops::interpolation::lerp;
pub use crate::random::{random_2d, random_3d, random_3d_legacy};
