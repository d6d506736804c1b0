use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the canopy workspace.
///
/// Covers parent resolution failures, provider-tagged fetch failures, timeouts,
/// and data or argument validation problems.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CanopyError {
    /// The parent has no qualifying children (none listed, or a child shares
    /// the parent's own identity).
    #[error("no child protocols for parent: {parent}")]
    NoChildren {
        /// Name of the parent that could not be aggregated.
        parent: String,
    },

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "snapshot for Aave V3".
        what: String,
    },

    /// Issues with the returned or produced data (serialization, missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or builder misuse.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A snapshot provider returned an error.
    #[error("{provider} failed: {msg}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {provider}")]
    ProviderTimeout {
        /// Provider name that timed out.
        provider: String,
        /// Capability label (e.g. "snapshot").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CanopyError {
    /// Helper: build a `NoChildren` error for the given parent name.
    pub fn no_children(parent: impl Into<String>) -> Self {
        Self::NoChildren {
            parent: parent.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(provider: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true for errors that callers should surface as "not found"
    /// rather than as a failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NoChildren { .. } | Self::NotFound { .. })
    }
}
