//! Common test utilities and fixtures for integration tests
//!
//! - Equipment fixtures built through the public input types
//! - Stores over the fake repository and over a mock HTTP backend
//! - JSON bodies shaped like the backend's responses

#![allow(dead_code)]

use std::sync::Arc;

use assetdesk_equipment::{
    DateInput, Equipment, EquipmentInput, EquipmentRepositoryFactory, EquipmentStatus,
    EquipmentStore, EquipmentType, FakeEquipmentRepository, MetadataInput, RecordId,
    RepositoryConfig,
};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Fixture record with a derived serial number
pub fn equipment(id: &str, asset_tag: &str, equipment_type: EquipmentType) -> Equipment {
    Equipment::create(EquipmentInput {
        id: RecordId::from(id),
        asset_tag: asset_tag.to_string(),
        serial_number: format!("SN-{asset_tag}"),
        model: format!("Model {asset_tag}"),
        equipment_type,
        status: EquipmentStatus::Available,
        location_id: "LOC-10".to_string(),
        purchase_date: DateInput::from("2024-01-15"),
        warranty_end: DateInput::from("2027-01-15"),
        metadata: MetadataInput::Empty,
    })
    .expect("fixture equipment is valid")
}

/// Seeded fake without simulated latency, plus a store over it
pub fn fake_store() -> (EquipmentStore, FakeEquipmentRepository) {
    let repository = FakeEquipmentRepository::seeded().expect("seed inventory parses");
    repository.behavior().set_latency_ms(0);
    let store = EquipmentStore::new(Arc::new(repository.clone()));
    (store, repository)
}

/// Store talking HTTP to `server`, with the endpoint given as an `/api` path
pub fn http_store(server: &MockServer) -> EquipmentStore {
    let config = RepositoryConfig {
        use_fake_api: false,
        api_url: server.uri(),
        endpoint: "/api/equipment".to_string(),
        fake_latency_ms: 0,
    };
    let repository = EquipmentRepositoryFactory::create(&config).expect("valid endpoint");
    EquipmentStore::new(repository)
}

/// Backend JSON for one record
pub fn record_json(id: Value, asset_tag: &str, equipment_type: &str, status: &str) -> Value {
    json!({
        "id": id,
        "assetTag": asset_tag,
        "serialNumber": format!("SN-{asset_tag}"),
        "model": format!("Model {asset_tag}"),
        "type": equipment_type,
        "status": status,
        "locationId": "LOC-20",
        "purchaseDate": "2023-03-01T00:00:00.000Z",
        "warrantyEnd": "2026-03-01",
        "metadata": { "owner": "IT" }
    })
}

/// A mixed inventory of `count` records with numeric ids
pub fn inventory_json(count: usize) -> Value {
    let records: Vec<Value> = (1..=count)
        .map(|n| {
            let equipment_type = if n % 2 == 0 { "Monitor" } else { "Laptop" };
            record_json(json!(n), &format!("HQ-{n:03}"), equipment_type, "InUse")
        })
        .collect();
    Value::Array(records)
}

pub fn ids(items: &[Equipment]) -> Vec<String> {
    items.iter().map(|e| e.id().to_string()).collect()
}
