use canopy_core::{
    AggregateOptions, CanopyError, ChildProtocol, Granularity, ParentProtocol, ParentSnapshot,
    ProtocolSnapshot, SizeOutcome, combine_children, enforce_size_limit,
};

use crate::Canopy;
use crate::core::tag_err;
use crate::router::util::join_with_deadline;

const CAPABILITY: &str = "parent_snapshot";

impl Canopy {
    /// Children of `parent` that qualify for aggregation, in directory order.
    ///
    /// # Errors
    /// Returns `NoChildren` if the directory lists none, or if any listed child
    /// shares the parent's name or id.
    pub fn children_of(&self, parent: &ParentProtocol) -> Result<Vec<ChildProtocol>, CanopyError> {
        let children = self.directory.children_of(parent);
        if children.is_empty() || children.iter().any(|c| c.collides_with(parent)) {
            return Err(CanopyError::no_children(parent.name.clone()));
        }
        Ok(children)
    }

    /// Build the combined snapshot for `parent`.
    ///
    /// Behavior:
    /// - Every child is fetched concurrently from the configured provider with
    ///   `options.granularity`; each call is bounded by the provider timeout and
    ///   the whole fan-out by the request timeout, if set.
    /// - Any failed child fails the request with that child's error (the first
    ///   failing child in directory order). No partial results.
    /// - Snapshots are combined with the clock's current time and then passed
    ///   through the size guard.
    ///
    /// # Errors
    /// `NoChildren`, the first child's fetch error, `RequestTimeout`, or `Data`
    /// if the result cannot be serialized for the size check.
    pub async fn parent_snapshot(
        &self,
        parent: &ParentProtocol,
        options: AggregateOptions,
    ) -> Result<ParentSnapshot, CanopyError> {
        self.parent_snapshot_with_outcome(parent, options)
            .await
            .map(|(snapshot, _)| snapshot)
    }

    /// Like [`parent_snapshot`](Self::parent_snapshot), also reporting the size
    /// guard's outcome.
    ///
    /// # Errors
    /// Same as [`parent_snapshot`](Self::parent_snapshot).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "canopy::router::parent::parent_snapshot",
            skip(self, parent),
            fields(parent = %parent.name, granularity = ?options.granularity),
        )
    )]
    pub async fn parent_snapshot_with_outcome(
        &self,
        parent: &ParentProtocol,
        options: AggregateOptions,
    ) -> Result<(ParentSnapshot, SizeOutcome), CanopyError> {
        let children = self.children_of(parent)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(children = children.len(), "resolved child protocols");

        let snapshots = self.fetch_children(&children, options.granularity).await?;
        let mut combined = combine_children(parent, snapshots, options, self.now())?;
        let outcome = enforce_size_limit(&mut combined, self.cfg.size_limit_bytes)?;
        Ok((combined, outcome))
    }

    async fn fetch_children(
        &self,
        children: &[ChildProtocol],
        granularity: Granularity,
    ) -> Result<Vec<ProtocolSnapshot>, CanopyError> {
        let provider = &self.provider;
        let name = provider.name();
        let timeout = self.cfg.provider_timeout;

        let tasks = children.iter().map(|child| async move {
            Self::provider_call_with_timeout(
                name,
                "snapshot",
                timeout,
                provider.snapshot(child, granularity),
            )
            .await
            .map_err(|e| tag_err(name, e))
        });

        let joined = join_with_deadline(tasks, self.cfg.request_timeout)
            .await
            .map_err(|_| CanopyError::request_timeout(CAPABILITY))?;

        // First failure in directory order wins.
        joined.into_iter().collect()
    }
}
