//! Fundamental array, dimension, and iterator objects.
//!
//! The analog of `numpy`'s `ndarray` / `dtype` / `nditer` trio: the
//! [`ArrayBase`] family, the dimension machinery, and the element-wise
//! iteration primitives ([`Zip`], [`azip!`]). Everything else in the curated
//! surface is built on what is re-exported here — methods like `zeros`,
//! `ones`, `reshape`, `swap_axes`, `sum`, or `mean` travel with the types
//! and need no alias of their own.

// The array family
// ----------------

pub use ndarray::{ArcArray, Array, ArrayBase, ArrayView, ArrayViewMut, CowArray};

// Dimensioned aliases
pub use ndarray::{Array0, Array1, Array2, Array3, Array4, Array5, Array6, ArrayD};
pub use ndarray::{ArcArray1, ArcArray2};
pub use ndarray::{
    ArrayView0, ArrayView1, ArrayView2, ArrayView3, ArrayView4, ArrayView5, ArrayView6, ArrayViewD,
};
pub use ndarray::{
    ArrayViewMut0, ArrayViewMut1, ArrayViewMut2, ArrayViewMut3, ArrayViewMut4, ArrayViewMut5,
    ArrayViewMut6, ArrayViewMutD,
};

// Storage traits (needed by library authors writing generic signatures;
// the concrete repr structs stay out, they are memory-layout internals)
pub use ndarray::{Data, DataMut, DataOwned, DataShared, RawData};

// Dimensions and shapes
// ---------------------

pub use ndarray::{Axis, AxisDescription, Dim, Dimension, IntoDimension, RemoveAxis};
pub use ndarray::{Ix, Ix0, Ix1, Ix2, Ix3, Ix4, Ix5, Ix6, IxDyn, Ixs};
pub use ndarray::{Shape, ShapeBuilder, StrideShape};

// Shape errors propagate unmodified from upstream
pub use ndarray::{ErrorKind, ShapeError};

// Iteration
// ---------

pub use ndarray::iter;
pub use ndarray::{azip, FoldWhile, IntoNdProducer, NdProducer, Zip};
