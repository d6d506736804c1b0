use std::time::Duration;

use canopy::{Canopy, CanopyError, DEFAULT_SIZE_LIMIT_BYTES};

use crate::helpers::{MockProvider, NOW, builder, directory};

#[test]
fn build_requires_provider_and_directory() {
    let err = Canopy::builder()
        .directory(directory(&[("1", "A")]))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CanopyError::InvalidArg(_)));

    let err = Canopy::builder()
        .provider(MockProvider::builder().build())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CanopyError::InvalidArg(_)));
}

#[test]
fn zero_size_limit_is_rejected() {
    let err = builder(MockProvider::builder().build(), directory(&[("1", "A")]))
        .size_limit_bytes(0)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, CanopyError::InvalidArg(_)));
}

#[test]
fn modifiers_land_in_config() {
    let canopy = builder(MockProvider::builder().build(), directory(&[("1", "A")]))
        .provider_timeout(Duration::from_millis(250))
        .request_timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let cfg = canopy.config();
    assert_eq!(cfg.provider_timeout, Duration::from_millis(250));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(2)));
    assert_eq!(cfg.size_limit_bytes, DEFAULT_SIZE_LIMIT_BYTES);
    assert_eq!(canopy.now(), NOW);
}
