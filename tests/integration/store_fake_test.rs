//! Equipment store workflows over the in-memory repository

mod common;

use std::sync::Arc;
use std::time::Duration;

use assetdesk_equipment::{
    EquipmentStatus, EquipmentStore, EquipmentType, FakeEquipmentRepository, FakeOutcome,
    Selection,
};
use common::{equipment, fake_store, ids};

#[tokio::test]
async fn test_browse_search_and_page_the_demo_inventory() {
    let (store, _) = fake_store();
    store.fetch_all().await;

    assert_eq!(store.total(), 6);
    assert_eq!(store.page_count(), 1);

    store.set_type(Selection::Only(EquipmentType::Accessory));
    assert_eq!(ids(&store.filtered()), ["4", "5"]);

    store.set_status(Selection::Only(EquipmentStatus::Retired));
    assert_eq!(ids(&store.filtered()), ["5"]);
    assert_eq!(store.filtered()[0].model(), "Mouse Genius");

    store.set_status(Selection::All);
    store.set_type(Selection::All);
    store.set_query("SAMSUNG");
    assert_eq!(ids(&store.filtered()), ["3"]);

    store.set_query("");
    store.set_page_size(4);
    store.set_page(2);
    assert_eq!(ids(&store.paged()), ["5", "6"]);
    assert_eq!(store.page_count(), 2);
}

#[tokio::test]
async fn test_create_update_delete_round() {
    let (store, repository) = fake_store();
    store.fetch_all().await;

    store
        .create(equipment("7", "ASSET-007", EquipmentType::Laptop))
        .await;
    assert_eq!(store.total(), 7);

    store
        .update(equipment("7", "ASSET-007", EquipmentType::Desktop))
        .await;
    let items = store.items();
    assert_eq!(items[6].equipment_type(), EquipmentType::Desktop);

    store.delete("1").await;
    assert_eq!(ids(&store.items()), ["2", "3", "4", "5", "6", "7"]);

    // Store and repository agree after every write
    let stored = repository.snapshot().unwrap();
    assert_eq!(stored, store.items());
    assert!(store.error().is_none());

    // A fresh load sees the same collection
    store.fetch_all().await;
    assert_eq!(ids(&store.items()), ["2", "3", "4", "5", "6", "7"]);
}

#[tokio::test]
async fn test_backend_outage_and_recovery() {
    let (store, repository) = fake_store();
    repository
        .behavior()
        .set_outcome(FakeOutcome::Fail("service unavailable".to_string()));

    store.fetch_all().await;
    assert!(store.items().is_empty());
    assert_eq!(
        store.error().as_deref(),
        Some("Backend error: service unavailable")
    );
    assert!(!store.loading());

    repository.behavior().reset();
    repository.behavior().set_latency_ms(0);
    store.fetch_all().await;
    assert!(store.error().is_none());
    assert_eq!(store.total(), 6);
}

#[tokio::test]
async fn test_blank_failure_message_maps_to_generic_error() {
    let (store, repository) = fake_store();
    repository
        .behavior()
        .set_outcome(FakeOutcome::Fail(String::new()));

    store.delete("2").await;

    assert_eq!(
        store.error().as_deref(),
        Some(assetdesk_common::GENERIC_ERROR_MESSAGE)
    );
}

#[tokio::test(start_paused = true)]
async fn test_loading_tracks_queued_writes() {
    let repository = FakeEquipmentRepository::seeded().unwrap();
    repository.behavior().set_latency_ms(100);
    let store = Arc::new(EquipmentStore::new(Arc::new(repository)));

    let first = tokio::spawn({
        let store = store.clone();
        async move { store.delete("1").await }
    });
    let second = tokio::spawn({
        let store = store.clone();
        async move { store.delete("2").await }
    });

    // The first delete has finished; the second is still running
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(store.loading());

    first.await.unwrap();
    second.await.unwrap();
    assert!(!store.loading());
}

#[tokio::test]
async fn test_exists_reflects_repository_contents() {
    let (store, _) = fake_store();
    tokio_test::assert_ok!(tokio::time::timeout(Duration::from_secs(1), store.fetch_all()).await);

    assert!(store.exists("6").await);
    store.delete("6").await;
    assert!(!store.exists("6").await);
}
