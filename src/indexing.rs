//! Indexing and slicing: the `s![...]` macro and its supporting types.
//!
//! The analog of `numpy`'s basic and sliced indexing. Element lookup
//! (`a[[i, j]]`, `get`, `get_mut`) and the searching helpers (`indexed_iter`
//! for nonzero/where-style scans) are methods on the array types.
//!
//! ```
//! use rndarray::{array, s};
//!
//! let a = array![[1, 2, 3], [4, 5, 6]];
//! let col = a.slice(s![.., 1]);
//! assert_eq!(col, array![2, 5]);
//! ```

// Slicing
// -------

pub use ndarray::s;
pub use ndarray::{NewAxis, Slice, SliceArg, SliceInfo, SliceInfoElem};

// Index producers and index types
// -------------------------------

pub use ndarray::{indices, indices_of, NdIndex};
