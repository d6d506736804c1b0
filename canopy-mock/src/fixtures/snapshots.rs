use canopy_core::{
    ChainTvls, Granularity, Hallmark, ProtocolSnapshot, Raise, TokensPoint, TvlPoint,
};

const DAY: i64 = 86_400;
const HOUR: i64 = 3_600;
/// 2024-01-01T00:00:00Z
pub const START: i64 = 1_704_067_200;

fn daily(values: &[f64]) -> Vec<TvlPoint> {
    values
        .iter()
        .zip(0_i64..)
        .map(|(&v, i)| TvlPoint::new(START + i * DAY, v))
        .collect()
}

fn hourly(values: &[f64]) -> Vec<TvlPoint> {
    values
        .iter()
        .zip(0_i64..)
        .map(|(&v, i)| TvlPoint::new(START + i * HOUR, v))
        .collect()
}

/// Daily series whose last sample was taken at `trailing_hour` past midnight.
fn daily_with_live_tail(values: &[f64], trailing_hour: i64) -> Vec<TvlPoint> {
    let mut series = daily(values);
    if let Some(last) = series.last_mut() {
        last.date += trailing_hour * HOUR;
    }
    series
}

fn tokens(series: &[TvlPoint], symbol: &str, price: f64) -> (Vec<TokensPoint>, Vec<TokensPoint>) {
    let amounts = series
        .iter()
        .map(|p| TokensPoint::new(p.date, [(symbol, p.total_liquidity_usd / price)]))
        .collect();
    let usd = series
        .iter()
        .map(|p| TokensPoint::new(p.date, [(symbol, p.total_liquidity_usd)]))
        .collect();
    (amounts, usd)
}

fn chain(series: Vec<TvlPoint>, symbol: &str, price: f64) -> ChainTvls {
    let (amounts, usd) = tokens(&series, symbol, price);
    ChainTvls {
        tvl: series,
        tokens: Some(amounts),
        tokens_in_usd: Some(usd),
    }
}

fn snapshot(id: &str, name: &str, chains: Vec<(&str, ChainTvls)>) -> ProtocolSnapshot {
    let mut snap = ProtocolSnapshot {
        id: id.to_string(),
        name: name.to_string(),
        ..ProtocolSnapshot::default()
    };
    for (chain_name, chain) in chains {
        if let Some(last) = chain.tvl.last() {
            snap.current_chain_tvls
                .insert(chain_name.to_string(), last.total_liquidity_usd);
        }
        snap.chain_tvls.insert(chain_name.to_string(), chain);
    }
    snap.tvl = sum_chains(&snap);
    snap.other_protocols = Some(vec![
        "Acme".to_string(),
        "Acme Lend".to_string(),
        "Acme Swap".to_string(),
        "Acme Bridge".to_string(),
    ]);
    snap
}

fn sum_chains(snap: &ProtocolSnapshot) -> Vec<TvlPoint> {
    let mut by_date = std::collections::BTreeMap::<i64, f64>::new();
    for chain in snap.chain_tvls.values() {
        for p in &chain.tvl {
            *by_date.entry(p.date).or_insert(0.0) += p.total_liquidity_usd;
        }
    }
    by_date.into_iter().map(|(d, v)| TvlPoint::new(d, v)).collect()
}

fn lend(granularity: Granularity) -> ProtocolSnapshot {
    let mut snap = if granularity.is_hourly() {
        snapshot(
            "101",
            "Acme Lend",
            vec![
                ("Arbitrum", chain(hourly(&[40.0, 41.0, 42.0, 43.0]), "USDC", 1.0)),
                ("Ethereum", chain(hourly(&[100.0, 101.0, 102.0, 103.0]), "ETH", 2_000.0)),
            ],
        )
    } else {
        snapshot(
            "101",
            "Acme Lend",
            vec![
                ("Arbitrum", chain(daily(&[40.0, 44.0, 48.0, 50.0]), "USDC", 1.0)),
                ("Ethereum", chain(daily(&[100.0, 110.0, 120.0, 130.0]), "ETH", 2_000.0)),
            ],
        )
    };
    snap.raises = Some(vec![Raise {
        date: START - 90 * DAY,
        name: "Acme Lend".to_string(),
        round: Some("Seed".to_string()),
        amount: Some(4.5),
        lead_investors: vec!["Paradigm Shift".to_string()],
        ..Raise::default()
    }]);
    snap.hallmarks = Some(vec![Hallmark::new(START + DAY, "Lend v2 launch")]);
    snap
}

fn swap(granularity: Granularity) -> ProtocolSnapshot {
    let mut snap = if granularity.is_hourly() {
        snapshot(
            "102",
            "Acme Swap",
            vec![("Ethereum", chain(hourly(&[10.0, 11.0, 12.0]), "ETH", 2_000.0))],
        )
    } else {
        // Latest sample is a live reading taken mid-morning.
        snapshot(
            "102",
            "Acme Swap",
            vec![(
                "Ethereum",
                chain(daily_with_live_tail(&[10.0, 12.0, 14.0], 9), "ETH", 2_000.0),
            )],
        )
    };
    snap.hallmarks = Some(vec![Hallmark::new(START + DAY, "Swap fee switch")]);
    snap
}

fn bridge(granularity: Granularity) -> ProtocolSnapshot {
    let series = if granularity.is_hourly() {
        hourly(&[5.0, 5.0])
    } else {
        daily(&[5.0, 6.0])
    };
    let mut snap = snapshot("103", "Acme Bridge", vec![("Polygon", chain(series, "MATIC", 0.5))]);
    snap.raises = Some(vec![Raise {
        date: START - 30 * DAY,
        name: "Acme Bridge".to_string(),
        round: Some("Series A".to_string()),
        amount: Some(12.0),
        ..Raise::default()
    }]);
    snap
}

/// Fixture snapshot for a child protocol name, shaped for `granularity`.
pub fn by_name(name: &str, granularity: Granularity) -> Option<ProtocolSnapshot> {
    match name {
        "Acme Lend" => Some(lend(granularity)),
        "Acme Swap" => Some(swap(granularity)),
        "Acme Bridge" => Some(bridge(granularity)),
        _ => None,
    }
}
