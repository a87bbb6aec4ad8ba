// AssetDesk - Local inventory console
//
// Loads the equipment list through the configured repository and prints
// the first page. Optional arguments: a search query, then a status.

use tracing::{error, info};

use assetdesk_common::AppConfig;
use assetdesk_equipment::{EquipmentStatus, Selection};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    assetdesk_app::init_tracing(&config);

    info!(
        use_fake_api = config.use_fake_api,
        endpoint = %config.equipment_endpoint,
        "Starting AssetDesk local console"
    );

    let store = assetdesk_app::create_store(&config).map_err(|e| {
        error!("Failed to create equipment store: {}", e);
        e
    })?;

    let mut args = std::env::args().skip(1);
    if let Some(query) = args.next() {
        store.set_query(query);
    }
    if let Some(status) = args.next() {
        store.set_status(status.parse::<Selection<EquipmentStatus>>()?);
    }

    store.fetch_all().await;

    if let Some(message) = store.error() {
        error!(%message, "Equipment list unavailable");
        anyhow::bail!(message);
    }

    println!(
        "{} equipment item(s), page {} of {}",
        store.total(),
        store.page(),
        store.page_count()
    );
    for equipment in store.paged() {
        println!(
            "{:<10} {:<10} {:<24} {:<12} {:<14} {} -> {}",
            equipment.id(),
            equipment.asset_tag(),
            equipment.model(),
            equipment.equipment_type().label(),
            equipment.status().label(),
            equipment.purchase_date(),
            equipment.warranty_end(),
        );
    }

    Ok(())
}
