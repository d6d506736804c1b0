use canopy::{AggregateOptions, CanopyError, ChildProtocol};

use crate::helpers::{JAN1, MockProvider, PARENT_ID, builder, directory, parent, snap};

#[tokio::test]
async fn parent_without_children_is_no_children() {
    let provider = MockProvider::builder().build();
    let canopy = builder(provider, directory(&[])).build().unwrap();

    let err = canopy
        .parent_snapshot(&parent(), AggregateOptions::daily())
        .await
        .expect_err("should error");
    assert!(matches!(err, CanopyError::NoChildren { ref parent } if parent == "Acme"));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn children_of_other_parents_are_ignored() {
    let provider = MockProvider::builder().returns(snap("Stray", &[(JAN1, 1.0)])).build();
    let dir = std::sync::Arc::new(canopy::StaticDirectory::new(vec![ChildProtocol::new(
        "9",
        "Stray",
        "parent#other",
    )]));
    let canopy = builder(provider, dir).build().unwrap();

    let err = canopy
        .parent_snapshot(&parent(), AggregateOptions::daily())
        .await
        .expect_err("should error");
    assert!(matches!(err, CanopyError::NoChildren { .. }));
}

#[tokio::test]
async fn child_sharing_parent_name_is_rejected_before_fetching() {
    let log = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let provider = MockProvider::builder()
        .returns(snap("Acme", &[(JAN1, 1.0)]))
        .returns(snap("Acme V2", &[(JAN1, 1.0)]))
        .record_calls(log.clone())
        .build();
    let canopy = builder(provider, directory(&[("1", "Acme"), ("2", "Acme V2")]))
        .build()
        .unwrap();

    let err = canopy
        .parent_snapshot(&parent(), AggregateOptions::daily())
        .await
        .expect_err("should error");
    assert!(matches!(err, CanopyError::NoChildren { .. }));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn child_sharing_parent_id_is_rejected() {
    let provider = MockProvider::builder().build();
    let canopy = builder(provider, directory(&[(PARENT_ID, "Acme Lend")]))
        .build()
        .unwrap();
    let err = canopy.children_of(&parent()).unwrap_err();
    assert!(matches!(err, CanopyError::NoChildren { .. }));
}
