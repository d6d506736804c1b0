use std::sync::Arc;
use std::time::Duration;

use canopy::{AggregateOptions, Canopy, CanopyError, ChildProtocol, StaticDirectory};
use canopy_mock::{ACME_ID, FIXTURE_START, MockProvider, acme, directory};

const DAY: i64 = 86_400;

fn canopy_over(dir: Arc<StaticDirectory>) -> Canopy {
    Canopy::builder()
        .provider(Arc::new(MockProvider::new()))
        .directory(dir)
        .clock(|| FIXTURE_START + 10 * DAY)
        .build()
        .unwrap()
}

#[tokio::test]
async fn acme_daily_fixture_combines_three_children() {
    let canopy = canopy_over(Arc::new(directory()));
    let out = canopy
        .parent_snapshot(&acme(), AggregateOptions::daily())
        .await
        .unwrap();

    assert_eq!(out.parent.name, "Acme");
    assert!(out.is_parent_protocol);
    // Swap's live trailing sample folds into the day-2 bucket; no extra point.
    let dates: Vec<i64> = out.tvl.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![FIXTURE_START, FIXTURE_START + DAY, FIXTURE_START + 2 * DAY, FIXTURE_START + 3 * DAY]
    );
    assert_eq!(
        out.chain_tvls.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Arbitrum", "Ethereum", "Polygon"]
    );
    assert_eq!(out.raises.len(), 2);
    assert_eq!(out.hallmarks.len(), 1);
}

#[tokio::test]
async fn acme_hourly_fixture_keeps_every_hour() {
    let canopy = canopy_over(Arc::new(directory()));
    let out = canopy
        .parent_snapshot(&acme(), AggregateOptions::hourly())
        .await
        .unwrap();
    assert_eq!(out.tvl.len(), 4);
    assert!(out.tvl.windows(2).all(|w| w[1].date - w[0].date == 3_600));
}

#[tokio::test(start_paused = true)]
async fn mock_fail_and_timeout_children_surface_errors() {
    let dir = Arc::new(StaticDirectory::new(vec![
        ChildProtocol::new("1", "Acme Lend", ACME_ID),
        ChildProtocol::new("2", "FAIL", ACME_ID),
    ]));
    let err = canopy_over(dir)
        .parent_snapshot(&acme(), AggregateOptions::daily())
        .await
        .unwrap_err();
    assert!(matches!(err, CanopyError::Provider { .. }));

    let dir = Arc::new(StaticDirectory::new(vec![ChildProtocol::new(
        "3", "TIMEOUT", ACME_ID,
    )]));
    let canopy = Canopy::builder()
        .provider(Arc::new(MockProvider::new()))
        .directory(dir)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = canopy
        .parent_snapshot(&acme(), AggregateOptions::daily())
        .await
        .unwrap_err();
    assert_eq!(err, CanopyError::provider_timeout("canopy-mock", "snapshot"));
}
