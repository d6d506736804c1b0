//! Canopy builds parent-protocol snapshots out of their children's snapshots.
//!
//! Overview
//! - Resolves a parent's children through an injected [`ProtocolDirectory`].
//! - Fetches every child concurrently from one [`SnapshotProvider`], bounded by
//!   per-call and optional whole-request timeouts.
//! - Sums locked value, token and token-in-USD series per date globally and per
//!   chain, concatenates raises and merges hallmarks (see `canopy_core::combine`).
//! - Drops per-chain token series when the serialized result would be too big.
//!
//! Key behaviors and trade-offs
//! - Daily feeds round a child's trailing "live" sample onto an existing daily
//!   bucket so the combined series has no near-duplicate last point. Hourly feeds,
//!   or daily requests where every child is hourly, never round.
//! - Any child failure fails the whole request; a partial parent would
//!   under-report its total.
//! - "Now" comes from an injectable clock so results are reproducible in tests.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use canopy::{AggregateOptions, Canopy, StaticDirectory};
//!
//! let canopy = Canopy::builder()
//!     .provider(Arc::new(MyApiProvider::new()))
//!     .directory(Arc::new(StaticDirectory::new(all_protocols)))
//!     .request_timeout(std::time::Duration::from_secs(30))
//!     .build()?;
//!
//! let parent = canopy
//!     .parent_snapshot(&aave, AggregateOptions::daily())
//!     .await?;
//! println!("{} points", parent.tvl.len());
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Canopy, CanopyBuilder, Clock, tag_err};
pub use router::util::join_with_deadline;

// Re-export core types for convenience
pub use canopy_core::{
    AggregateOptions, CanopyConfig, CanopyError, ChainTvls, ChildProtocol, DEFAULT_SIZE_LIMIT_BYTES,
    Granularity, Hallmark, ParentProtocol, ParentSnapshot, ProtocolDirectory, ProtocolSnapshot,
    Raise, SizeOutcome, SnapshotProvider, StaticDirectory, TokenAmounts, TokensPoint, TvlPoint,
};
