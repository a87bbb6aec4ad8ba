//! AssetDesk client composition root
//!
//! Wires configuration, logging, the equipment repository and the list
//! store together.

use std::sync::Arc;

use assetdesk_common::AppConfig;
use assetdesk_equipment::{EquipmentRepositoryFactory, EquipmentStore, RepositoryConfig};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Production emits JSON lines,
/// everything else the pretty human format.
pub fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.production {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Build the equipment store over the configured repository
pub fn create_store(config: &AppConfig) -> Result<Arc<EquipmentStore>, anyhow::Error> {
    let repository = EquipmentRepositoryFactory::create(&RepositoryConfig::from(config))?;
    Ok(Arc::new(EquipmentStore::with_page_size(
        repository,
        config.page_size,
    )))
}
