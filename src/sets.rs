//! Set operations: the `np.unique` analog.
//!
//! There is no array-level uniqueness primitive in the ecosystem; the
//! building block is iterator-level, so the curated surface carries
//! [`Itertools`] for `unique` / `unique_by` / `dedup` over element
//! iterators.
//!
//! ```
//! use rndarray::{array, Itertools};
//!
//! let a = array![3, 1, 3, 2, 1];
//! let uniq: Vec<i32> = a.iter().copied().unique().sorted().collect();
//! assert_eq!(uniq, vec![1, 2, 3]);
//! ```

pub use itertools::Itertools;
