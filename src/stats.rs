//! Statistics: means, moments, quantiles, covariance, histograms.
//!
//! The `ndarray-stats` extension traits, plus the upstream support modules
//! their signatures need ([`histogram`] grids and bins, quantile
//! [`interpolate`] strategies, and the [`errors`] types that propagate
//! unmodified to callers).
//!
//! `sum`, `mean`, `std`, `var` and their `_axis` variants are inherent
//! methods of the array types; what is re-exported here is everything
//! beyond them.
//!
//! ```
//! use rndarray::{array, QuantileExt};
//!
//! let a = array![1.0, 5.0, 3.0];
//! assert_eq!(a.argmax().unwrap(), 1);
//! ```

// Extension traits
// ----------------

pub use ndarray_stats::{
    CorrelationExt, HistogramExt, Quantile1dExt, QuantileExt, SummaryStatisticsExt,
};

// Support modules (grids, interpolation strategies, error types)
// --------------------------------------------------------------

pub use ndarray_stats::{errors, histogram, interpolate};
