//! Array creation functions analogous to `np.array`, `np.zeros`, `np.linspace`.
//!
//! Only the free-standing creation helpers need re-exporting; the constant
//! and range constructors (`zeros`, `ones`, `from_elem`, `from_shape_vec`,
//! `linspace`, `range`, `logspace`, `geomspace`, `eye`, `from_diag`) are
//! inherent associated functions of [`Array`](crate::Array) and come along
//! with the type:
//!
//! ```
//! use rndarray as rnd;
//!
//! let z = rnd::Array2::<f64>::zeros((2, 3));
//! assert_eq!(z.shape(), &[2, 3]);
//!
//! let x = rnd::Array::linspace(0.0, 1.0, 5);
//! assert_eq!(x.len(), 5);
//! ```

// From existing data
// ------------------

pub use ndarray::{arr0, arr1, arr2, arr3};
pub use ndarray::{aview0, aview1, aview2, aview_mut1, aview_mut2};

/// The `array![...]` literal macro, re-exported from `ndarray`.
///
/// ```
/// use rndarray::array;
///
/// let a = array![[1, 2], [3, 4]];
/// assert_eq!(a.shape(), &[2, 2]);
/// ```
pub use ndarray::array;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arr2_matches_upstream() {
        let ours = arr2(&[[1, 2], [3, 4]]);
        let theirs = ndarray::arr2(&[[1, 2], [3, 4]]);
        assert_eq!(ours, theirs);
    }

    #[test]
    fn test_array_macro() {
        let a = array![1.0, 2.0, 3.0];
        assert_eq!(a.len(), 3);
        assert_eq!(a, ndarray::array![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_aview_borrows() {
        let data = [1, 2, 3, 4];
        let v = aview1(&data);
        assert_eq!(v.sum(), 10);
    }
}
