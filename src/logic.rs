//! Approximate comparison: the `np.allclose` / `np.isclose` analog.
//!
//! The `approx` traits and macros, which `ndarray` implements for whole
//! arrays (two arrays compare close when every element pair does).
//! Elementwise predicates (`is_nan`, `is_finite`, `is_infinite`) live on the
//! [`Float`](crate::Float) scalar trait and are applied with `mapv` or
//! [`Zip`](crate::Zip); boolean reductions are `iter().all(..)` /
//! `iter().any(..)` over the result.
//!
//! ```
//! use rndarray::{abs_diff_eq, array};
//!
//! let a = array![1.0, 2.0];
//! let b = array![1.0, 2.0 + 1e-12];
//! assert!(abs_diff_eq!(a, b, epsilon = 1e-9));
//! ```
//!
//! The `assert_*` macro forms are test tooling and are left out on purpose.

pub use approx::{AbsDiffEq, RelativeEq, UlpsEq};
pub use approx::{abs_diff_eq, abs_diff_ne, relative_eq, relative_ne, ulps_eq, ulps_ne};
