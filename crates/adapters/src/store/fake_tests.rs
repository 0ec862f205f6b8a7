// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn put_copy_delete_lifecycle() {
    let store = FakeStoreAdapter::new();
    store.put(Path::new("/tmp/a.tar.gz"), "pre/a").await.unwrap();
    store.copy("pre/a", "nightly/a").await.unwrap();
    store.delete("pre/a").await.unwrap();

    assert_eq!(store.keys(), vec!["nightly/a".to_string()]);
    assert_eq!(store.calls().len(), 3);
}

#[tokio::test]
async fn put_overwrites_existing_key() {
    let store = FakeStoreAdapter::new();
    store.put(Path::new("/tmp/one"), "k").await.unwrap();
    store.put(Path::new("/tmp/two"), "k").await.unwrap();
    assert_eq!(store.keys(), vec!["k".to_string()]);
}

#[tokio::test]
async fn copy_of_missing_key_fails() {
    let store = FakeStoreAdapter::new();
    let err = store.copy("absent", "dest").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert!(!store.contains("dest"));
}

#[tokio::test]
async fn injected_failure() {
    let store = FakeStoreAdapter::new();
    store.fail("put");
    assert!(store.put(Path::new("/tmp/a"), "k").await.is_err());
    assert!(!store.contains("k"));
}
