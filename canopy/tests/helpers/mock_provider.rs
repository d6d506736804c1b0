#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use canopy::{CanopyError, ChildProtocol, Granularity, ProtocolSnapshot, SnapshotProvider};
use tokio::time::{Duration, sleep};

/// Simple in-memory provider used by integration tests.
/// Tailor behavior (per-child snapshots, delays, closures) via the builder.
pub struct MockProvider {
    pub name: &'static str,
    pub snapshots: HashMap<String, ProtocolSnapshot>,
    pub delays: HashMap<String, Duration>,
    pub snapshot_fn: Option<
        Arc<dyn Fn(&ChildProtocol, Granularity) -> Result<ProtocolSnapshot, CanopyError> + Send + Sync>,
    >,
    pub calls: Arc<Mutex<Vec<(String, Granularity)>>>,
}

#[async_trait]
impl SnapshotProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn snapshot(
        &self,
        child: &ChildProtocol,
        granularity: Granularity,
    ) -> Result<ProtocolSnapshot, CanopyError> {
        self.calls
            .lock()
            .unwrap()
            .push((child.name.clone(), granularity));
        if let Some(d) = self.delays.get(&child.name) {
            sleep(*d).await;
        }
        if let Some(f) = &self.snapshot_fn {
            return f(child, granularity);
        }
        self.snapshots
            .get(&child.name)
            .cloned()
            .ok_or_else(|| CanopyError::not_found(format!("snapshot for {}", child.name)))
    }
}

/* ---------- Tiny builder helpers used by tests ---------- */

impl MockProvider {
    pub fn builder() -> MockProviderBuilder {
        MockProviderBuilder::new()
    }
}

pub struct MockProviderBuilder {
    name: &'static str,
    snapshots: HashMap<String, ProtocolSnapshot>,
    delays: HashMap<String, Duration>,
    snapshot_fn: Option<
        Arc<dyn Fn(&ChildProtocol, Granularity) -> Result<ProtocolSnapshot, CanopyError> + Send + Sync>,
    >,
    calls: Arc<Mutex<Vec<(String, Granularity)>>>,
}

impl MockProviderBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            snapshots: HashMap::new(),
            delays: HashMap::new(),
            snapshot_fn: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Serve `snap` for the child whose name matches `snap.name`.
    pub fn returns(mut self, snap: ProtocolSnapshot) -> Self {
        self.snapshots.insert(snap.name.clone(), snap);
        self
    }

    pub fn delay_for(mut self, child: &str, d: Duration) -> Self {
        self.delays.insert(child.to_string(), d);
        self
    }

    pub fn with_snapshot_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&ChildProtocol, Granularity) -> Result<ProtocolSnapshot, CanopyError>
            + Send
            + Sync
            + 'static,
    {
        self.snapshot_fn = Some(Arc::new(f));
        self
    }

    /// Share the call log so a test can inspect it after the provider is moved.
    pub fn record_calls(mut self, log: Arc<Mutex<Vec<(String, Granularity)>>>) -> Self {
        self.calls = log;
        self
    }

    pub fn build(self) -> Arc<MockProvider> {
        Arc::new(MockProvider {
            name: self.name,
            snapshots: self.snapshots,
            delays: self.delays,
            snapshot_fn: self.snapshot_fn,
            calls: self.calls,
        })
    }
}
