//! Time-series utilities used by the parent aggregation fold.
//!
//! Modules include:
//! - `infer`: classify a series as hourly or daily
//! - `align`: choose the canonical bucket date for a sample
//! - `merge`: accumulate series into per-date buckets
/// Bucket date selection with trailing-sample rounding.
pub mod align;
/// Granularity classification helpers.
pub mod infer;
/// Accumulators and merge helpers for series and hallmarks.
pub mod merge;
