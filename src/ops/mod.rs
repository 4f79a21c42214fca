//! Higher-level vector operations

pub mod angle;
pub mod interpolation;
