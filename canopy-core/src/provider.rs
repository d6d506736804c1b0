use async_trait::async_trait;

use crate::types::{CanopyError, ChildProtocol, Granularity, ParentProtocol, ProtocolSnapshot};

/// Source of per-protocol snapshots (typically a remote protocol API).
///
/// Implementations are expected to return the child's aggregated global series
/// alongside the per-chain breakdown. Transport, slug generation and response
/// decoding are the implementation's concern.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Stable provider name used for error tagging and logs.
    fn name(&self) -> &'static str;

    /// Fetch the full snapshot for `child` from the feed matching `granularity`.
    async fn snapshot(
        &self,
        child: &ChildProtocol,
        granularity: Granularity,
    ) -> Result<ProtocolSnapshot, CanopyError>;
}

/// Read-only lookup of the protocols that belong to a parent.
pub trait ProtocolDirectory: Send + Sync {
    /// Children listed under `parent`, in directory order.
    fn children_of(&self, parent: &ParentProtocol) -> Vec<ChildProtocol>;
}

/// In-memory directory over a fixed protocol list.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    protocols: Vec<ChildProtocol>,
}

impl StaticDirectory {
    /// Build a directory from every known protocol (parented or not).
    #[must_use]
    pub const fn new(protocols: Vec<ChildProtocol>) -> Self {
        Self { protocols }
    }

    /// All protocols known to the directory.
    #[must_use]
    pub fn protocols(&self) -> &[ChildProtocol] {
        &self.protocols
    }
}

impl FromIterator<ChildProtocol> for StaticDirectory {
    fn from_iter<I: IntoIterator<Item = ChildProtocol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ProtocolDirectory for StaticDirectory {
    fn children_of(&self, parent: &ParentProtocol) -> Vec<ChildProtocol> {
        self.protocols
            .iter()
            .filter(|p| p.parent_protocol.as_deref() == Some(parent.id.as_str()))
            .cloned()
            .collect()
    }
}
