//! Configuration types shared across the orchestrator and aggregation helpers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Serialized size (in bytes) at or above which per-chain token series are dropped.
pub const DEFAULT_SIZE_LIMIT_BYTES: usize = 5_800_000;

/// Sampling granularity requested from snapshot providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Granularity {
    /// Daily snapshot feed. Trailing-sample date rounding may apply.
    #[default]
    Daily,
    /// Hourly feed. Dates are never rounded.
    Hourly,
}

impl Granularity {
    /// Returns true for the fine-grained hourly feed.
    #[must_use]
    pub const fn is_hourly(self) -> bool {
        matches!(self, Self::Hourly)
    }
}

/// Per-call options for building a parent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOptions {
    /// Which provider feed to request for every child.
    pub granularity: Granularity,
    /// Skip folding each child's global tvl, tokens and tokens-in-USD series.
    ///
    /// Per-chain series and current chain totals are always folded.
    pub skip_aggregated_tvl: bool,
}

impl AggregateOptions {
    /// Options for the hourly feed.
    #[must_use]
    pub const fn hourly() -> Self {
        Self {
            granularity: Granularity::Hourly,
            skip_aggregated_tvl: false,
        }
    }

    /// Options for the daily feed.
    #[must_use]
    pub const fn daily() -> Self {
        Self {
            granularity: Granularity::Daily,
            skip_aggregated_tvl: false,
        }
    }

    /// Toggle skipping of global series.
    #[must_use]
    pub const fn skip_aggregated_tvl(mut self, yes: bool) -> Self {
        self.skip_aggregated_tvl = yes;
        self
    }
}

/// Global configuration for the `Canopy` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanopyConfig {
    /// Timeout for each individual child snapshot fetch.
    pub provider_timeout: Duration,
    /// Optional deadline for the whole concurrent fetch fan-out.
    pub request_timeout: Option<Duration>,
    /// Serialized size threshold for the size guard.
    pub size_limit_bytes: usize,
}

impl Default for CanopyConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
            size_limit_bytes: DEFAULT_SIZE_LIMIT_BYTES,
        }
    }
}
