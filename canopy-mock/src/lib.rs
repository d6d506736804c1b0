//! Deterministic snapshot providers for tests and demos.
//!
//! - [`MockProvider`] serves static fixtures keyed by child protocol name.
//! - [`DynamicMockProvider`] defers every call to a [`DynamicMockController`]
//!   so tests can script returns, failures and hangs per child.
use std::time::Duration;

use async_trait::async_trait;
use canopy_core::{
    CanopyError, ChildProtocol, Granularity, ParentProtocol, ProtocolSnapshot, SnapshotProvider,
    StaticDirectory,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockProvider, MockBehavior};
pub use fixtures::directory::ACME_ID;
pub use fixtures::snapshots::START as FIXTURE_START;

/// Mock provider for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Children named `FAIL` return a provider error; children named `TIMEOUT`
/// sleep for 200ms before answering, which trips short provider timeouts.
pub struct MockProvider;

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(name: &str) -> Result<(), CanopyError> {
        match name {
            "FAIL" => Err(CanopyError::provider(
                "canopy-mock",
                format!("forced failure for {name}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SnapshotProvider for MockProvider {
    fn name(&self) -> &'static str {
        "canopy-mock"
    }

    async fn snapshot(
        &self,
        child: &ChildProtocol,
        granularity: Granularity,
    ) -> Result<ProtocolSnapshot, CanopyError> {
        Self::maybe_fail_or_timeout(&child.name).await?;
        fixtures::snapshots::by_name(&child.name, granularity)
            .ok_or_else(|| CanopyError::not_found(format!("snapshot for {}", child.name)))
    }
}

/// The fixture parent protocol ("Acme") whose children have snapshots in [`MockProvider`].
#[must_use]
pub fn acme() -> ParentProtocol {
    fixtures::directory::acme()
}

/// A directory listing Acme's three children plus a few unrelated protocols.
#[must_use]
pub fn directory() -> StaticDirectory {
    fixtures::directory::directory()
}
