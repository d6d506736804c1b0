use std::sync::Arc;
use std::time::Duration;

use canopy_core::{CanopyConfig, CanopyError, ProtocolDirectory, SnapshotProvider};

/// Source of "now" in epoch seconds.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

fn system_clock() -> Clock {
    Arc::new(|| chrono::Utc::now().timestamp())
}

/// Orchestrator that fetches child snapshots and combines them into parents.
pub struct Canopy {
    pub(crate) provider: Arc<dyn SnapshotProvider>,
    pub(crate) directory: Arc<dyn ProtocolDirectory>,
    pub(crate) cfg: CanopyConfig,
    pub(crate) clock: Clock,
}

/// Builder for constructing a `Canopy` orchestrator with custom configuration.
pub struct CanopyBuilder {
    provider: Option<Arc<dyn SnapshotProvider>>,
    directory: Option<Arc<dyn ProtocolDirectory>>,
    cfg: CanopyConfig,
    clock: Clock,
}

impl Default for CanopyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CanopyBuilder {
    /// Create a new builder with defaults.
    ///
    /// A provider and a directory are required; timeouts and the size limit
    /// start at [`CanopyConfig::default`] and the clock reads system time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            directory: None,
            cfg: CanopyConfig::default(),
            clock: system_clock(),
        }
    }

    /// Set the snapshot provider used for every child.
    ///
    /// Registering again replaces the previous provider.
    #[must_use]
    pub fn provider(mut self, p: Arc<dyn SnapshotProvider>) -> Self {
        self.provider = Some(p);
        self
    }

    /// Set the directory used to resolve a parent's children.
    #[must_use]
    pub fn directory(mut self, d: Arc<dyn ProtocolDirectory>) -> Self {
        self.directory = Some(d);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: CanopyConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-child snapshot timeout.
    ///
    /// A child that does not answer in time fails the whole request with
    /// `ProviderTimeout`.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for fetching all children.
    ///
    /// When exceeded, returns a `RequestTimeout` error.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Serialized size (bytes) at or above which per-chain token series are dropped.
    #[must_use]
    pub const fn size_limit_bytes(mut self, limit: usize) -> Self {
        self.cfg.size_limit_bytes = limit;
        self
    }

    /// Override the clock that supplies "now" (epoch seconds) to date rounding.
    #[must_use]
    pub fn clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> i64 + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the `Canopy` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no provider or directory was set, or if the
    /// size limit is zero.
    pub fn build(self) -> Result<Canopy, CanopyError> {
        let Some(provider) = self.provider else {
            return Err(CanopyError::InvalidArg(
                "no snapshot provider; set one via provider(...)".to_string(),
            ));
        };
        let Some(directory) = self.directory else {
            return Err(CanopyError::InvalidArg(
                "no protocol directory; set one via directory(...)".to_string(),
            ));
        };
        if self.cfg.size_limit_bytes == 0 {
            return Err(CanopyError::InvalidArg(
                "size_limit_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(Canopy {
            provider,
            directory,
            cfg: self.cfg,
            clock: self.clock,
        })
    }
}

/// Attribute a provider error to `provider` unless it already carries structure.
pub fn tag_err(provider: &str, e: CanopyError) -> CanopyError {
    match e {
        e @ (CanopyError::NotFound { .. }
        | CanopyError::NoChildren { .. }
        | CanopyError::ProviderTimeout { .. }
        | CanopyError::Provider { .. }
        | CanopyError::RequestTimeout { .. }) => e,
        other => CanopyError::Provider {
            provider: provider.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Await `fut`, bounded by `deadline` when one is set.
///
/// On expiry returns `RequestTimeout("request")`; call sites remap the label.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, CanopyError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => (tokio::time::timeout(d, fut).await)
            .map_err(|_| CanopyError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Canopy {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "canopy::core::provider_call_with_timeout",
            skip(fut),
            fields(
                provider = provider_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        provider_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, CanopyError>
    where
        Fut: core::future::Future<Output = Result<T, CanopyError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(CanopyError::provider_timeout(provider_name, capability)))
    }

    /// Start building a new `Canopy` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use canopy::Canopy;
    ///
    /// let canopy = Canopy::builder()
    ///     .provider(Arc::new(MyApiProvider::new()))
    ///     .directory(Arc::new(canopy::StaticDirectory::new(all_protocols)))
    ///     .provider_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CanopyBuilder {
        CanopyBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &CanopyConfig {
        &self.cfg
    }

    /// Current time according to the configured clock, epoch seconds.
    #[must_use]
    pub fn now(&self) -> i64 {
        (self.clock)()
    }
}
