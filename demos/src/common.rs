use std::sync::Arc;

use canopy::{Canopy, CanopyError, ParentProtocol};
use canopy_core::{ProtocolDirectory, SnapshotProvider};

/// Snapshot provider for demos (fixture-backed).
#[must_use]
pub fn get_provider() -> Arc<dyn SnapshotProvider> {
    Arc::new(canopy_mock::MockProvider::new())
}

/// Directory listing the fixture parent's children.
#[must_use]
pub fn get_directory() -> Arc<dyn ProtocolDirectory> {
    Arc::new(canopy_mock::directory())
}

/// The fixture parent protocol.
#[must_use]
pub fn parent() -> ParentProtocol {
    canopy_mock::acme()
}

/// Orchestrator over the demo provider and directory.
///
/// The clock is pinned ten days after the fixtures start so output is stable.
///
/// # Errors
/// Propagates builder validation errors.
pub fn build_canopy() -> Result<Canopy, CanopyError> {
    Canopy::builder()
        .provider(get_provider())
        .directory(get_directory())
        .clock(|| canopy_mock::FIXTURE_START + 10 * 86_400)
        .build()
}

/// Format epoch seconds as an RFC 3339 UTC timestamp.
#[must_use]
pub fn fmt_date(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0).map_or_else(|| ts.to_string(), |dt| dt.to_rfc3339())
}
