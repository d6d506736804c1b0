use std::time::Duration;

use canopy::{AggregateOptions, CanopyError};

use crate::helpers::{JAN1, MockProvider, builder, directory, parent, snap};

#[tokio::test]
async fn missing_child_snapshot_fails_whole_request() {
    let provider = MockProvider::builder()
        .returns(snap("A", &[(JAN1, 1.0)]))
        .build();
    let canopy = builder(provider, directory(&[("1", "A"), ("2", "Ghost")]))
        .build()
        .unwrap();

    let err = canopy
        .parent_snapshot(&parent(), AggregateOptions::daily())
        .await
        .expect_err("should error");
    assert!(matches!(err, CanopyError::NotFound { ref what } if what.contains("Ghost")));
}

#[tokio::test]
async fn unstructured_provider_errors_are_tagged() {
    let provider = MockProvider::builder()
        .name("llama")
        .with_snapshot_fn(|_c, _g| Err(CanopyError::Data("unexpected payload".into())))
        .build();
    let canopy = builder(provider, directory(&[("1", "A")])).build().unwrap();

    let err = canopy
        .parent_snapshot(&parent(), AggregateOptions::daily())
        .await
        .expect_err("should error");
    match err {
        CanopyError::Provider { provider, msg } => {
            assert_eq!(provider, "llama");
            assert!(msg.contains("unexpected payload"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn first_failure_in_directory_order_wins() {
    // "B" fails immediately, "A" fails later; A is listed first so its error surfaces.
    let provider = MockProvider::builder()
        .delay_for("A", Duration::from_millis(50))
        .with_snapshot_fn(|c, _g| Err(CanopyError::provider("mock", format!("boom {}", c.name))))
        .build();
    let canopy = builder(provider, directory(&[("1", "A"), ("2", "B")]))
        .build()
        .unwrap();

    let err = canopy
        .parent_snapshot(&parent(), AggregateOptions::daily())
        .await
        .expect_err("should error");
    assert_eq!(err, CanopyError::provider("mock", "boom A"));
}
