use canopy::{AggregateOptions, ChainTvls, TokensPoint};

use crate::helpers::{JAN1, JAN2, MockProvider, builder, directory, parent, snap, tvl};

fn with_tokens(name: &str) -> canopy::ProtocolSnapshot {
    let mut s = snap(name, &[(JAN1, 1.0), (JAN2, 2.0)]);
    let tokens: Vec<TokensPoint> = [JAN1, JAN2]
        .iter()
        .map(|&d| TokensPoint::new(d, [("ETH", 1.0), ("USDC", 100.0)]))
        .collect();
    s.chain_tvls.insert(
        "Arbitrum".to_string(),
        ChainTvls {
            tvl: tvl(&[(JAN1, 1.0), (JAN2, 2.0)]),
            tokens: Some(tokens.clone()),
            tokens_in_usd: Some(tokens.clone()),
        },
    );
    s.tokens = Some(tokens);
    s
}

#[tokio::test]
async fn oversized_result_drops_chain_tokens_only() {
    let provider = MockProvider::builder()
        .returns(with_tokens("A"))
        .returns(with_tokens("B"))
        .build();
    let canopy = builder(provider, directory(&[("1", "A"), ("2", "B")]))
        .size_limit_bytes(64)
        .build()
        .unwrap();

    let (out, outcome) = canopy
        .parent_snapshot_with_outcome(&parent(), AggregateOptions::daily())
        .await
        .unwrap();
    assert!(outcome.truncated);
    assert!(outcome.bytes >= 64);
    for chain in out.chain_tvls.values() {
        assert!(chain.tokens.is_none());
        assert!(chain.tokens_in_usd.is_none());
        assert!(!chain.tvl.is_empty());
    }
    assert_eq!(out.tokens.len(), 2);
    assert_eq!(out.tvl.len(), 2);
}

#[tokio::test]
async fn default_limit_keeps_small_results_intact() {
    let provider = MockProvider::builder().returns(with_tokens("A")).build();
    let canopy = builder(provider, directory(&[("1", "A")])).build().unwrap();

    let (out, outcome) = canopy
        .parent_snapshot_with_outcome(&parent(), AggregateOptions::daily())
        .await
        .unwrap();
    assert!(!outcome.truncated);
    assert_eq!(outcome.bytes, serde_json::to_vec(&out).unwrap().len());
    let arb = &out.chain_tvls["Arbitrum"];
    assert_eq!(arb.tokens.as_ref().map(Vec::len), Some(2));
    assert_eq!(arb.tokens_in_usd.as_ref().map(Vec::len), Some(2));
}
