//! Sorting, searching, and counting.
//!
//! [`Sort1dExt`] supplies in-place partial sorting and selection for 1-D
//! arrays. The searching and counting side of this category — `argmin`,
//! `argmax`, quantiles, histogram counts — overlaps with statistics and is
//! exported exactly once, via the [`stats`](crate::stats) module
//! ([`QuantileExt`](crate::QuantileExt),
//! [`HistogramExt`](crate::HistogramExt)); the double listing upstream is a
//! documentation artifact, not a behavioral one.

pub use ndarray_stats::Sort1dExt;
