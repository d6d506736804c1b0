use std::collections::BTreeMap;

use crate::timeseries::align::AlignContext;
use crate::timeseries::infer::rounding_enabled;
use crate::timeseries::merge::{Accumulator, merge_hallmarks, merge_series};
use crate::types::{
    AggregateOptions, CanopyError, ChainTvls, ParentProtocol, ParentSnapshot, ProtocolSnapshot,
    TokensPoint, TvlPoint,
};

/// Per-chain accumulators for one chain name.
#[derive(Debug, Clone, Default)]
struct ChainAccumulators {
    tvl: Accumulator<TvlPoint>,
    tokens_in_usd: Accumulator<TokensPoint>,
    tokens: Accumulator<TokensPoint>,
}

impl ChainAccumulators {
    fn fold(self, chain: &ChainTvls, ctx: AlignContext) -> Self {
        let Self {
            tvl,
            tokens_in_usd,
            tokens,
        } = self;
        Self {
            tvl: merge_series(tvl, &chain.tvl, ctx),
            tokens_in_usd: match &chain.tokens_in_usd {
                Some(series) => merge_series(tokens_in_usd, series, ctx),
                None => tokens_in_usd,
            },
            tokens: match &chain.tokens {
                Some(series) => merge_series(tokens, series, ctx),
                None => tokens,
            },
        }
    }

    fn into_chain_tvls(self) -> ChainTvls {
        ChainTvls {
            tvl: self.tvl.into_series(),
            tokens: Some(self.tokens.into_series()),
            tokens_in_usd: Some(self.tokens_in_usd.into_series()),
        }
    }
}

fn has_samples(chain: &ChainTvls) -> bool {
    !chain.tvl.is_empty()
        || chain.tokens.as_ref().is_some_and(|s| !s.is_empty())
        || chain.tokens_in_usd.as_ref().is_some_and(|s| !s.is_empty())
}

/// Running state of a parent aggregation.
///
/// Each [`fold_child`](Self::fold_child) consumes the state and returns the
/// next one; children must be folded most-complete first so the longest
/// series establishes the canonical date axis.
#[derive(Debug, Clone, Default)]
pub struct CombinedTvls {
    current_chain_tvls: BTreeMap<String, f64>,
    chain_tvls: BTreeMap<String, ChainAccumulators>,
    tvl: Accumulator<TvlPoint>,
    tokens: Accumulator<TokensPoint>,
    tokens_in_usd: Accumulator<TokensPoint>,
}

impl CombinedTvls {
    /// Empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one child's snapshot into the running state.
    ///
    /// - Current chain totals are summed per chain name.
    /// - Each chain's tvl, tokens-in-USD and token series are merged; the
    ///   child's first chain in provider order never rounds its trailing sample.
    /// - Unless `skip_aggregated_tvl`, the child's global tokens-in-USD, token
    ///   and tvl series are merged too.
    #[must_use]
    pub fn fold_child(
        mut self,
        child: &ProtocolSnapshot,
        rounding: bool,
        skip_aggregated_tvl: bool,
        now: i64,
    ) -> Self {
        for (name, value) in &child.current_chain_tvls {
            *self.current_chain_tvls.entry(name.clone()).or_insert(0.0) += value;
        }

        for (position, (name, chain)) in child.chain_tvls.iter().enumerate() {
            if !has_samples(chain) {
                continue;
            }
            let ctx = AlignContext::chain(rounding, position == 0, now);
            let acc = self.chain_tvls.remove(name).unwrap_or_default();
            self.chain_tvls.insert(name.clone(), acc.fold(chain, ctx));
        }

        if !skip_aggregated_tvl {
            let ctx = AlignContext::global(rounding, now);
            if let Some(series) = &child.tokens_in_usd {
                self.tokens_in_usd = merge_series(self.tokens_in_usd, series, ctx);
            }
            if let Some(series) = &child.tokens {
                self.tokens = merge_series(self.tokens, series, ctx);
            }
            self.tvl = merge_series(self.tvl, &child.tvl, ctx);
        }

        self
    }

    /// Global tvl accumulator so far.
    #[must_use]
    pub const fn tvl(&self) -> &Accumulator<TvlPoint> {
        &self.tvl
    }

    /// Finish the fold into a parent snapshot for `parent`.
    ///
    /// Raises, hallmarks and `other_protocols` are left empty; see
    /// [`combine_children`] for the full assembly.
    #[must_use]
    pub fn into_parent_snapshot(self, parent: ParentProtocol) -> ParentSnapshot {
        ParentSnapshot {
            parent,
            current_chain_tvls: self.current_chain_tvls,
            chain_tvls: self
                .chain_tvls
                .into_iter()
                .map(|(name, acc)| (name, acc.into_chain_tvls()))
                .collect(),
            tokens: self.tokens.into_series(),
            tokens_in_usd: self.tokens_in_usd.into_series(),
            tvl: self.tvl.into_series(),
            is_parent_protocol: true,
            raises: Vec::new(),
            other_protocols: None,
            hallmarks: Vec::new(),
        }
    }
}

/// Combine child snapshots into the parent's snapshot.
///
/// `children` must be in directory order: `other_protocols` is copied from the
/// first entry. Children are then folded in descending order of global tvl
/// length (ties keep directory order). Raises are concatenated and hallmarks
/// merged in that same processing order.
///
/// `now` bounds the trailing-sample rounding scan; pass a fixed value for
/// reproducible output.
///
/// The size guard is not applied here.
///
/// # Errors
/// Returns `CanopyError::NoChildren` if `children` is empty.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "canopy_core::combine_children",
        skip(parent, children),
        fields(parent = %parent.name, children = children.len(), skip_aggregated_tvl = options.skip_aggregated_tvl),
    )
)]
pub fn combine_children(
    parent: &ParentProtocol,
    mut children: Vec<ProtocolSnapshot>,
    options: AggregateOptions,
    now: i64,
) -> Result<ParentSnapshot, CanopyError> {
    if children.is_empty() {
        return Err(CanopyError::no_children(parent.name.clone()));
    }

    let other_protocols = children[0].other_protocols.clone();
    let rounding = rounding_enabled(options.granularity, &children);
    #[cfg(feature = "tracing")]
    tracing::debug!(rounding, granularity = ?options.granularity, "folding child snapshots");

    // Stable: equal lengths keep directory order.
    children.sort_by(|a, b| b.tvl.len().cmp(&a.tvl.len()));

    let combined = children.iter().fold(CombinedTvls::new(), |acc, child| {
        acc.fold_child(child, rounding, options.skip_aggregated_tvl, now)
    });

    let mut snapshot = combined.into_parent_snapshot(parent.clone());
    snapshot.raises = children
        .iter()
        .flat_map(|c| c.raises.iter().flatten().cloned())
        .collect();
    snapshot.hallmarks = merge_hallmarks(children.iter().filter_map(|c| c.hallmarks.as_deref()));
    snapshot.other_protocols = other_protocols;
    Ok(snapshot)
}
