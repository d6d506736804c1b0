use canopy::AggregateOptions;
use canopy_demos::common::{build_canopy, parent};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,canopy=trace,canopy_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let canopy = build_canopy()?;
    let acme = parent();

    let daily = canopy.parent_snapshot(&acme, AggregateOptions::daily()).await?;
    tracing::info!(points = daily.tvl.len(), "daily parent snapshot");

    let hourly = canopy.parent_snapshot(&acme, AggregateOptions::hourly()).await?;
    tracing::info!(points = hourly.tvl.len(), "hourly parent snapshot");

    Ok(())
}
