//! Protocol snapshots as served by providers, and the combined parent snapshot.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::protocol::ParentProtocol;

/// Token symbol → amount (either raw token count or USD value).
pub type TokenAmounts = BTreeMap<String, f64>;

/// One locked-value sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TvlPoint {
    /// Epoch seconds.
    pub date: i64,
    /// Locked value in USD.
    #[serde(rename = "totalLiquidityUSD")]
    pub total_liquidity_usd: f64,
}

impl TvlPoint {
    /// Construct a sample.
    #[must_use]
    pub const fn new(date: i64, total_liquidity_usd: f64) -> Self {
        Self {
            date,
            total_liquidity_usd,
        }
    }
}

/// One token-breakdown sample.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokensPoint {
    /// Epoch seconds.
    pub date: i64,
    /// Amount per token symbol.
    pub tokens: TokenAmounts,
}

impl TokensPoint {
    /// Construct a sample from `(symbol, amount)` pairs.
    pub fn new<I, S>(date: i64, tokens: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            date,
            tokens: tokens.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Time series for one chain.
///
/// Token series are optional: providers may omit them, and the size guard
/// nulls them out on oversized combined snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainTvls {
    /// Locked value over time.
    #[serde(default)]
    pub tvl: Vec<TvlPoint>,
    /// Token counts over time.
    #[serde(default)]
    pub tokens: Option<Vec<TokensPoint>>,
    /// Token USD values over time.
    #[serde(default)]
    pub tokens_in_usd: Option<Vec<TokensPoint>>,
}

/// A funding round record. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Raise {
    /// Epoch seconds of the announcement.
    pub date: i64,
    /// Name of the raising project.
    #[serde(default)]
    pub name: String,
    /// Round label, e.g. "Seed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    /// Amount raised in millions of USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Chains the project targets.
    #[serde(default)]
    pub chains: Vec<String>,
    /// Sector description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Source link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Lead investors.
    #[serde(default)]
    pub lead_investors: Vec<String>,
    /// Other investors.
    #[serde(default)]
    pub other_investors: Vec<String>,
    /// Post-money valuation in millions of USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation: Option<f64>,
    /// Identifier of the protocol the raise belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defillama_id: Option<String>,
}

/// An event marker at a date, serialized as `[date, description]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hallmark(pub i64, pub String);

impl Hallmark {
    /// Construct a hallmark.
    pub fn new(date: i64, description: impl Into<String>) -> Self {
        Self(date, description.into())
    }

    /// Epoch seconds.
    #[must_use]
    pub const fn date(&self) -> i64 {
        self.0
    }

    /// Description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.1
    }
}

/// A single protocol's full snapshot as returned by a provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolSnapshot {
    /// Identifier of the protocol.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Global locked value over time.
    #[serde(default)]
    pub tvl: Vec<TvlPoint>,
    /// Per-chain breakdown in the provider's order.
    ///
    /// The first entry is the child's anchor chain when combining.
    #[serde(default)]
    pub chain_tvls: IndexMap<String, ChainTvls>,
    /// Current locked value per chain (non-temporal).
    #[serde(default)]
    pub current_chain_tvls: BTreeMap<String, f64>,
    /// Global token counts over time.
    #[serde(default)]
    pub tokens: Option<Vec<TokensPoint>>,
    /// Global token USD values over time.
    #[serde(default)]
    pub tokens_in_usd: Option<Vec<TokensPoint>>,
    /// Funding rounds.
    #[serde(default)]
    pub raises: Option<Vec<Raise>>,
    /// Event markers.
    #[serde(default)]
    pub hallmarks: Option<Vec<Hallmark>>,
    /// Names of sibling protocols under the same parent.
    #[serde(default)]
    pub other_protocols: Option<Vec<String>>,
}

/// The combined snapshot of a parent protocol.
///
/// Serialized exactly like an ordinary protocol response (the parent's
/// metadata is flattened in) plus `isParentProtocol: true`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentSnapshot {
    /// Parent metadata.
    #[serde(flatten)]
    pub parent: ParentProtocol,
    /// Summed current locked value per chain.
    pub current_chain_tvls: BTreeMap<String, f64>,
    /// Summed per-chain series.
    pub chain_tvls: BTreeMap<String, ChainTvls>,
    /// Summed global token counts.
    pub tokens: Vec<TokensPoint>,
    /// Summed global token USD values.
    pub tokens_in_usd: Vec<TokensPoint>,
    /// Summed global locked value.
    pub tvl: Vec<TvlPoint>,
    /// Always true for combined snapshots.
    pub is_parent_protocol: bool,
    /// Concatenated raises of all children.
    pub raises: Vec<Raise>,
    /// Sibling metadata copied from one child.
    #[serde(default)]
    pub other_protocols: Option<Vec<String>>,
    /// Merged event markers sorted by date.
    pub hallmarks: Vec<Hallmark>,
}
