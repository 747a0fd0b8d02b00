//! Scalar type objects and the traits that classify array elements.
//!
//! The language primitives (`i8`..`i64`, `u8`..`u64`, `f32`, `f64`, `usize`,
//! `isize`) need no alias, and redundant aliases are excluded by policy:
//! where several names resolve to one underlying type, none is exported.
//! What this category carries is the part of the scalar vocabulary that
//! lives in crates — complex numbers and the numeric traits generic code is
//! written against.

// Complex scalars
// ---------------

pub use num_complex::{Complex, Complex32, Complex64};

// Numeric traits for generic element code
// ---------------------------------------

pub use num_traits::{Float, FromPrimitive, Num, NumCast, One, ToPrimitive, Zero};

// Element classification used in `ndarray` signatures
pub use ndarray::{LinalgScalar, NdFloat, ScalarOperand};
