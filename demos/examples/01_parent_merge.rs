use canopy::AggregateOptions;
use canopy_demos::common::{build_canopy, fmt_date, parent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Orchestrator over the fixture provider and directory.
    let canopy = build_canopy()?;
    let acme = parent();

    let children = canopy.children_of(&acme)?;
    println!(
        "{} has {} children: {}",
        acme.name,
        children.len(),
        children
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // 2. Daily feed: Acme Swap's mid-morning reading folds into the last daily bucket.
    let daily = canopy.parent_snapshot(&acme, AggregateOptions::daily()).await?;
    println!("\n## Combined daily TVL ({} points)", daily.tvl.len());
    for p in &daily.tvl {
        println!(" - {}: ${:.2}", fmt_date(p.date), p.total_liquidity_usd);
    }

    println!("\n## Per chain");
    for (chain, series) in &daily.chain_tvls {
        let last = series.tvl.last().map_or(0.0, |p| p.total_liquidity_usd);
        println!(" - {chain}: {} points, latest ${last:.2}", series.tvl.len());
    }

    println!("\n## Hallmarks");
    for h in &daily.hallmarks {
        println!(" - {}: {}", fmt_date(h.date()), h.description());
    }

    // 3. Hourly feed: no rounding, every sample keeps its own timestamp.
    let hourly = canopy.parent_snapshot(&acme, AggregateOptions::hourly()).await?;
    println!("\n## Combined hourly TVL ({} points)", hourly.tvl.len());
    for p in hourly.tvl.iter().take(10) {
        println!(" - {}: ${:.2}", fmt_date(p.date), p.total_liquidity_usd);
    }

    Ok(())
}
