use canopy::{AggregateOptions, Canopy};
use canopy_demos::common::{get_directory, get_provider, parent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A deliberately tiny limit to show per-chain token series being dropped.
    let canopy = Canopy::builder()
        .provider(get_provider())
        .directory(get_directory())
        .size_limit_bytes(2_048)
        .build()?;

    let (snapshot, outcome) = canopy
        .parent_snapshot_with_outcome(&parent(), AggregateOptions::daily())
        .await?;

    println!(
        "serialized size: {} bytes (truncated: {})",
        outcome.bytes, outcome.truncated
    );
    for (chain, series) in &snapshot.chain_tvls {
        println!(
            " - {chain}: tvl points={}, tokens={}, tokensInUsd={}",
            series.tvl.len(),
            series.tokens.as_ref().map_or("null".to_string(), |t| t.len().to_string()),
            series
                .tokens_in_usd
                .as_ref()
                .map_or("null".to_string(), |t| t.len().to_string()),
        );
    }

    let json = serde_json::to_string(&snapshot)?;
    println!("\nfinal payload: {} bytes", json.len());
    Ok(())
}
