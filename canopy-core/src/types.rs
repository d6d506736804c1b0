//! Re-export of foundational types from `canopy-types`.
// Consolidated re-exports so downstream crates can depend on `canopy-core` only

pub use canopy_types::{AggregateOptions, CanopyConfig, DEFAULT_SIZE_LIMIT_BYTES, Granularity};
pub use canopy_types::{CanopyError, ChildProtocol, IndexMap, ParentProtocol};
pub use canopy_types::{
    ChainTvls, Hallmark, ParentSnapshot, ProtocolSnapshot, Raise, TokenAmounts, TokensPoint,
    TvlPoint,
};
