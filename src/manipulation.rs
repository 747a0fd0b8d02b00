//! Joining and rearranging arrays: `np.concatenate`, `np.stack`.
//!
//! Shape-changing and axis-moving operations (`to_shape`, `into_shape`,
//! `swap_axes`, `permuted_axes`, `reversed_axes`, `t`, `insert_axis`,
//! `broadcast`) are methods on the array types and are covered by the
//! [`fundamental`](crate::fundamental) re-exports.

// Joining arrays
// --------------

/// Concatenate arrays along an existing axis (both the function and the
/// `concatenate![...]` macro form).
///
/// ```
/// use rndarray::{array, concatenate, Axis};
///
/// let a = array![[1, 2]];
/// let b = array![[3, 4]];
/// let c = concatenate(Axis(0), &[a.view(), b.view()]).unwrap();
/// assert_eq!(c, array![[1, 2], [3, 4]]);
/// ```
pub use ndarray::concatenate;

/// Stack arrays along a new axis (both the function and the `stack![...]`
/// macro form).
pub use ndarray::stack;

// Memory order argument for shape-changing methods such as `to_shape`
pub use ndarray::Order;

#[cfg(test)]
mod tests {
    use ndarray::{array, Axis};

    use super::*;

    #[test]
    fn test_concatenate_matches_upstream() {
        let a = array![1, 2, 3];
        let b = array![4, 5];

        let ours = concatenate(Axis(0), &[a.view(), b.view()]).unwrap();
        let theirs = ndarray::concatenate(Axis(0), &[a.view(), b.view()]).unwrap();
        assert_eq!(ours, theirs);
        assert_eq!(ours, array![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_stack_adds_axis() {
        let a = array![1, 2];
        let b = array![3, 4];

        let s = stack(Axis(0), &[a.view(), b.view()]).unwrap();
        assert_eq!(s, array![[1, 2], [3, 4]]);
        assert_eq!(s, ndarray::stack(Axis(0), &[a.view(), b.view()]).unwrap());
    }

    #[test]
    fn test_concatenate_shape_error_propagates() {
        let a = array![[1, 2]];
        let b = array![[3, 4, 5]];
        // Mismatched off-axis lengths fail upstream; the error reaches the
        // caller unmodified.
        assert!(concatenate(Axis(0), &[a.view(), b.view()]).is_err());
    }
}
