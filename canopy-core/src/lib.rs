//! canopy-core
//!
//! Core traits and algorithms for combining child protocol snapshots into a
//! single parent snapshot.
//!
//! - `types`: re-exported data structures (snapshots, protocols, options, errors).
//! - `provider`: the `SnapshotProvider` and `ProtocolDirectory` collaborator traits.
//! - `timeseries`: granularity inference, date alignment and series merging.
//! - `combine`: the fold over all children that produces a `ParentSnapshot`.
//! - `size`: serialized-size guard applied to the final snapshot.
//!
//! Everything outside `provider` is synchronous and purely in-memory: the
//! orchestrator fetches all children first, then hands the snapshots to
//! [`combine_children`] in one sequential pass.
#![warn(missing_docs)]

/// Fold of child snapshots into a parent snapshot.
pub mod combine;
/// Collaborator traits: snapshot providers and the protocol directory.
pub mod provider;
/// Serialized-size guard.
pub mod size;
/// Time-series utilities for classifying, aligning and merging series.
pub mod timeseries;
pub mod types;

pub use combine::{CombinedTvls, combine_children};
pub use provider::{ProtocolDirectory, SnapshotProvider, StaticDirectory};
pub use size::{SizeOutcome, enforce_size_limit, serialized_len, strip_chain_tokens};
pub use timeseries::align::{AlignContext, bucket_date};
pub use timeseries::infer::{DAY_SECONDS, all_hourly, is_hourly, rounding_enabled};
pub use timeseries::merge::{Accumulator, Sample, merge_hallmarks, merge_series};
pub use types::*;
