use std::sync::{Arc, Mutex};

use canopy::{AggregateOptions, Granularity};

use crate::helpers::{JAN1, MockProvider, builder, directory, parent, snap};

#[tokio::test]
async fn requested_granularity_reaches_the_provider() {
    for (opts, expected) in [
        (AggregateOptions::daily(), Granularity::Daily),
        (AggregateOptions::hourly(), Granularity::Hourly),
    ] {
        let log = Arc::new(Mutex::new(Vec::new()));
        let provider = MockProvider::builder()
            .returns(snap("A", &[(JAN1, 1.0)]))
            .returns(snap("B", &[(JAN1, 1.0)]))
            .record_calls(log.clone())
            .build();
        let canopy = builder(provider, directory(&[("1", "A"), ("2", "B")]))
            .build()
            .unwrap();
        canopy.parent_snapshot(&parent(), opts).await.unwrap();

        let mut calls = log.lock().unwrap().clone();
        calls.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            calls,
            vec![("A".to_string(), expected), ("B".to_string(), expected)]
        );
    }
}
