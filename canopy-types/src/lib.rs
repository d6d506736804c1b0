//! Canopy-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
/// Unified error type.
pub mod error;
mod protocol;
mod snapshot;

pub use config::{AggregateOptions, CanopyConfig, DEFAULT_SIZE_LIMIT_BYTES, Granularity};
pub use error::CanopyError;
pub use indexmap::IndexMap;
pub use protocol::{ChildProtocol, ParentProtocol};
pub use snapshot::{
    ChainTvls, Hallmark, ParentSnapshot, ProtocolSnapshot, Raise, TokenAmounts, TokensPoint,
    TvlPoint,
};
