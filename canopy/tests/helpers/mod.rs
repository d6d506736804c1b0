// Re-export helpers so tests can `use helpers::*;`
pub mod mock_provider;

#[allow(unused_imports)]
pub use mock_provider::MockProvider;

use std::sync::Arc;

use canopy::{
    Canopy, CanopyBuilder, ChainTvls, ChildProtocol, ParentProtocol, ProtocolSnapshot,
    StaticDirectory, TvlPoint,
};

// ---------- Lightweight fixtures and helpers for tests ----------

pub const PARENT_ID: &str = "parent#acme";
pub const H: i64 = 3_600;
pub const D: i64 = 86_400;
/// 2024-01-01T00:00:00Z
pub const JAN1: i64 = 1_704_067_200;
pub const JAN2: i64 = JAN1 + D;
pub const JAN3: i64 = JAN2 + D;
/// Fixed clock used by every orchestrator in tests.
pub const NOW: i64 = JAN3 + 12 * H;

pub fn parent() -> ParentProtocol {
    ParentProtocol::new(PARENT_ID, "Acme")
}

pub fn child(id: &str, name: &str) -> ChildProtocol {
    ChildProtocol::new(id, name, PARENT_ID)
}

/// Directory listing the given children under [`parent`].
pub fn directory(children: &[(&str, &str)]) -> Arc<StaticDirectory> {
    Arc::new(
        children
            .iter()
            .map(|(id, name)| child(id, name))
            .collect::<StaticDirectory>(),
    )
}

pub fn tvl(points: &[(i64, f64)]) -> Vec<TvlPoint> {
    points.iter().map(|&(d, v)| TvlPoint::new(d, v)).collect()
}

/// Snapshot with a global series and one "Ethereum" chain mirroring it.
pub fn snap(name: &str, points: &[(i64, f64)]) -> ProtocolSnapshot {
    let mut s = ProtocolSnapshot {
        id: name.to_lowercase(),
        name: name.to_string(),
        tvl: tvl(points),
        ..ProtocolSnapshot::default()
    };
    s.chain_tvls.insert(
        "Ethereum".to_string(),
        ChainTvls {
            tvl: tvl(points),
            tokens: None,
            tokens_in_usd: None,
        },
    );
    if let Some(last) = points.last() {
        s.current_chain_tvls.insert("Ethereum".to_string(), last.1);
    }
    s
}

/// Builder pre-wired with `provider`, `dir` and the fixed [`NOW`] clock.
pub fn builder(
    provider: Arc<MockProvider>,
    dir: Arc<StaticDirectory>,
) -> CanopyBuilder {
    Canopy::builder()
        .provider(provider)
        .directory(dir)
        .clock(|| NOW)
}
