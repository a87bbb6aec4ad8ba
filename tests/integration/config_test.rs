//! Environment configuration driving the composition root

use std::env;

use assetdesk_common::AppConfig;
use serial_test::serial;

const VARS: [&str; 6] = [
    "ASSETDESK_API_URL",
    "ASSETDESK_USE_FAKE_API",
    "ASSETDESK_EQUIPMENT_ENDPOINT",
    "ASSETDESK_FAKE_LATENCY_MS",
    "ASSETDESK_PAGE_SIZE",
    "ASSETDESK_PRODUCTION",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[tokio::test]
#[serial]
async fn test_fake_store_from_environment() {
    clear_env();
    env::set_var("ASSETDESK_USE_FAKE_API", "true");
    env::set_var("ASSETDESK_FAKE_LATENCY_MS", "0");
    env::set_var("ASSETDESK_PAGE_SIZE", "5");

    let config = AppConfig::from_env().unwrap();
    let store = assetdesk_app::create_store(&config).unwrap();
    store.fetch_all().await;

    assert_eq!(store.total(), 6);
    assert_eq!(store.page_size(), 5);
    assert_eq!(store.page_count(), 2);
    clear_env();
}

#[tokio::test]
#[serial]
async fn test_http_store_from_environment() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    clear_env();
    env::set_var("ASSETDESK_USE_FAKE_API", "false");
    env::set_var("ASSETDESK_API_URL", format!("{}/", server.uri()));

    let config = AppConfig::from_env().unwrap();
    let store = assetdesk_app::create_store(&config).unwrap();
    store.fetch_all().await;

    assert!(store.error().is_none());
    assert_eq!(store.total(), 0);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_page_size_is_rejected() {
    clear_env();
    env::set_var("ASSETDESK_PAGE_SIZE", "zero");

    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    clear_env();
}
