//! Array padding: the `np.pad` analog.
//!
//! `ndarray` has no padding builtin; the ecosystem primitive is
//! `ndarray-ndimage`'s [`pad`], re-exported here together with its
//! [`PadMode`] (constant, edge, reflect, symmetric, wrap, and the
//! statistical modes).
//!
//! Enabled by the `pad` feature (on by default).

pub use ndarray_ndimage::{pad, PadMode};
