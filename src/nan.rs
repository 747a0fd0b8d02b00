//! NaN-aware reductions: the `np.nanmin` / `np.nanmax` / `np.nanquantile`
//! family.
//!
//! In the rust-ndarray ecosystem NaN-skipping is a capability of the
//! statistics traits rather than a parallel set of functions: [`MaybeNan`]
//! describes element types with a NaN-free counterpart, and the `*_skipnan`
//! methods (`min_skipnan`, `argmax_skipnan`, `quantile_axis_skipnan_mut`, …)
//! arrive with [`QuantileExt`](crate::QuantileExt), reducing over the
//! non-NaN elements in the original element type. Only the [`MaybeNanExt`]
//! folds work in terms of the NaN-free counterpart type; the `noisy_float`
//! wrappers are those counterparts for `f32`/`f64`. `n64(x)` panics on NaN
//! input, which is what makes a value of type [`N64`] totally ordered.

pub use ndarray_stats::{MaybeNan, MaybeNanExt};

// NaN-free float wrappers for f32 / f64
pub use noisy_float::types::{n32, n64, N32, N64};

#[cfg(test)]
mod tests {
    use ndarray::array;
    use ndarray_stats::QuantileExt;

    use super::*;

    #[test]
    fn test_min_skipnan_ignores_nan() {
        let a = array![3.0, f64::NAN, 1.0, 2.0];
        // Plain `min` refuses NaN input; the skipnan variant reduces over
        // the remaining elements, exactly as upstream does.
        assert!(a.min().is_err());
        assert_eq!(*a.min_skipnan(), 1.0);
        assert_eq!(*a.max_skipnan(), 3.0);
    }

    #[test]
    fn test_argmax_skipnan() {
        let a = array![f64::NAN, 5.0, 2.0];
        assert_eq!(a.argmax_skipnan().unwrap(), 1);
    }

    #[test]
    fn test_noisy_float_is_ordered() {
        let mut v = vec![n64(2.0), n64(0.5), n64(1.0)];
        v.sort();
        assert_eq!(v, vec![n64(0.5), n64(1.0), n64(2.0)]);
    }

    #[test]
    fn test_fold_skipnan() {
        let a = array![1.0, f64::NAN, 2.0];
        let sum = a.fold_skipnan(n64(0.0), |acc, &x| acc + x);
        assert_eq!(sum.raw(), 3.0);
    }
}
