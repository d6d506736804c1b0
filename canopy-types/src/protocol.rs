//! Protocol directory entries.

use serde::{Deserialize, Serialize};

/// Metadata of a parent protocol, copied verbatim onto the combined snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentProtocol {
    /// Stable identifier, e.g. "parent#aave".
    pub id: String,
    /// Display name.
    pub name: String,
    /// Homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Chains the parent is deployed on.
    #[serde(default)]
    pub chains: Vec<String>,
    /// CoinGecko identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gecko_id: Option<String>,
    /// CoinMarketCap identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmc_id: Option<String>,
    /// Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Treasury adapter slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treasury: Option<String>,
    /// Governance identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance_id: Option<Vec<String>>,
    /// Github organisations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<Vec<String>>,
}

impl ParentProtocol {
    /// Construct a parent with only id and name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A tracked protocol that may belong to a parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProtocol {
    /// Stable identifier.
    pub id: String,
    /// Display name; also the identity compared against the parent's name.
    pub name: String,
    /// Identifier of the owning parent, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_protocol: Option<String>,
}

impl ChildProtocol {
    /// Construct a child belonging to `parent_id`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_protocol: Some(parent_id.into()),
        }
    }

    /// True when this child shares the parent's identity (same name or same id).
    #[must_use]
    pub fn collides_with(&self, parent: &ParentProtocol) -> bool {
        self.name == parent.name || self.id == parent.id
    }
}
