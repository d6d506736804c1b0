use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use canopy_core::{CanopyError, ChildProtocol, Granularity, ProtocolSnapshot, SnapshotProvider};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(CanopyError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    snapshot_rules: HashMap<String, MockBehavior<ProtocolSnapshot>>,
    requests: Vec<(String, Granularity)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `snapshot` calls for a child protocol name.
    pub async fn set_snapshot_behavior(
        &self,
        child_name: impl Into<String>,
        behavior: MockBehavior<ProtocolSnapshot>,
    ) {
        let mut guard = self.state.lock().await;
        guard.snapshot_rules.insert(child_name.into(), behavior);
    }

    /// Every `(child name, granularity)` requested so far, in call order.
    pub async fn requests(&self) -> Vec<(String, Granularity)> {
        self.state.lock().await.requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.snapshot_rules.clear();
        guard.requests.clear();
    }
}

/// A provider that defers all behavior to an external controller.
///
/// Children without a configured behavior yield `CanopyError::NotFound`.
pub struct DynamicMockProvider {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockProvider {
    /// Create a new dynamic mock provider and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn SnapshotProvider>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SnapshotProvider>, controller)
    }
}

#[async_trait]
impl SnapshotProvider for DynamicMockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn snapshot(
        &self,
        child: &ChildProtocol,
        granularity: Granularity,
    ) -> Result<ProtocolSnapshot, CanopyError> {
        // Don't hold the lock across the hang below.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push((child.name.clone(), granularity));
            guard.snapshot_rules.get(&child.name).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(snap)) => Ok(snap),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(CanopyError::not_found(format!(
                "snapshot for {}",
                child.name
            ))),
        }
    }
}
