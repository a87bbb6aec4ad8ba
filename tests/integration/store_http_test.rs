//! Equipment store workflows against a mock REST backend

mod common;

use assetdesk_equipment::{EquipmentType, Selection};
use common::{equipment, http_store, ids, inventory_json, record_json};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_all_resolves_api_path_and_normalizes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inventory_json(12)))
        .expect(1)
        .mount(&server)
        .await;

    let store = http_store(&server);
    store.fetch_all().await;

    assert!(store.error().is_none());
    assert_eq!(store.total(), 12);
    assert_eq!(store.page_count(), 2);
    assert_eq!(store.paged().len(), 10);

    let first = &store.items()[0];
    assert_eq!(first.id(), "1");
    assert_eq!(
        first.purchase_date(),
        chrono::NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
    );
    assert_eq!(first.metadata().get("owner"), Some(&json!("IT")));

    store.set_type(Selection::Only(EquipmentType::Monitor));
    assert_eq!(store.total(), 6);
    assert_eq!(ids(&store.filtered())[..3], ["2", "4", "6"]);
}

#[tokio::test]
async fn test_create_posts_without_id_and_appends_backend_copy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inventory_json(2)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/equipment"))
        .and(body_json(json!({
            "assetTag": "NEW-001",
            "serialNumber": "SN-NEW-001",
            "model": "Model NEW-001",
            "type": "Server",
            "status": "Available",
            "locationId": "LOC-10",
            "purchaseDate": "2024-01-15",
            "warrantyEnd": "2027-01-15",
            "metadata": {}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record_json(
            json!("srv-99"),
            "NEW-001",
            "Server",
            "Available",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let store = http_store(&server);
    store.fetch_all().await;
    store
        .create(equipment("", "NEW-001", EquipmentType::Server))
        .await;

    assert!(store.error().is_none());
    assert_eq!(ids(&store.items()), ["1", "2", "srv-99"]);
}

#[tokio::test]
async fn test_update_puts_to_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inventory_json(3)))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/equipment/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(
            json!(2),
            "HQ-002",
            "Monitor",
            "InRepair",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let store = http_store(&server);
    store.fetch_all().await;
    store
        .update(equipment("2", "HQ-002", EquipmentType::Monitor))
        .await;

    let items = store.items();
    assert_eq!(ids(&items), ["1", "2", "3"]);
    assert_eq!(
        items[1].status(),
        assetdesk_equipment::EquipmentStatus::InRepair
    );
}

#[tokio::test]
async fn test_update_of_missing_record_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/equipment/77"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = http_store(&server);
    store
        .update(equipment("77", "GHOST-77", EquipmentType::Other))
        .await;

    assert_eq!(
        store.error().as_deref(),
        Some("Not found: Equipment 77 not found")
    );
    assert!(store.items().is_empty());
}

#[tokio::test]
async fn test_delete_removes_after_backend_confirms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inventory_json(3)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/equipment/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let store = http_store(&server);
    store.fetch_all().await;
    store.delete("1").await;

    assert_eq!(ids(&store.items()), ["2", "3"]);
}

#[tokio::test]
async fn test_server_error_keeps_items_and_sets_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inventory_json(3)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/equipment/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database locked"))
        .mount(&server)
        .await;

    let store = http_store(&server);
    store.fetch_all().await;
    store.delete("3").await;

    assert_eq!(store.items().len(), 3);
    let message = store.error().unwrap();
    assert!(message.contains("500"));
    assert!(message.contains("database locked"));
    assert!(!store.loading());
}

#[tokio::test]
async fn test_malformed_payload_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/equipment"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "assetTag": "", "id": 1 }])),
        )
        .mount(&server)
        .await;

    let store = http_store(&server);
    store.fetch_all().await;

    assert!(store.items().is_empty());
    assert!(store.error().unwrap().starts_with("Serialization error"));
}
