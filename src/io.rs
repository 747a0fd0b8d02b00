//! Serialization of arrays in the `.npy` / `.npz` formats, via `ndarray-npy`.
//!
//! The analog of `np.load` / `np.save` / `np.savez`. The format, header
//! parsing, and error semantics are entirely `ndarray-npy`'s; nothing is
//! wrapped or validated here. Memory-mapped views of on-disk arrays are
//! covered by the `View*` extension traits.
//!
//! Enabled by the `io` feature (on by default).

// Whole-file helpers
// ------------------

pub use ndarray_npy::{read_npy, write_npy, write_zeroed_npy};

// Reader/writer extension traits
pub use ndarray_npy::{ReadNpyExt, WriteNpyExt};
pub use ndarray_npy::{ViewMutNpyExt, ViewNpyExt};

// Archives (`.npz`)
pub use ndarray_npy::{NpzReader, NpzWriter};

// Element markers and upstream error types
pub use ndarray_npy::{ReadableElement, WritableElement};
pub use ndarray_npy::{ReadNpyError, ReadNpzError, WriteNpyError, WriteNpzError};
