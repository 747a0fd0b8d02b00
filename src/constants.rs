//! Mathematical constants: `inf`, `nan`, `e`, `pi`.
//!
//! `E`, `PI`, and `TAU` are re-exports of the standard library's `f64`
//! constants. Infinity and NaN are associated consts of `f64` upstream and
//! cannot be re-exported by `use`, so they are bound here by value —
//! bit-identical to their sources. The `newaxis` of the original category
//! is [`NewAxis`](crate::NewAxis), re-exported with the indexing types.

pub use std::f64::consts::{E, PI, TAU};

/// Positive infinity, identical to `f64::INFINITY`.
pub const INF: f64 = f64::INFINITY;

/// Not-a-number, identical to `f64::NAN`.
pub const NAN: f64 = f64::NAN;
