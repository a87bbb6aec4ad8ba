//! Equipment persistence
//!
//! Two interchangeable backends implement [`EquipmentRepository`]:
//! - `FakeEquipmentRepository`: in-memory, seeded, with simulated latency
//! - `HttpEquipmentRepository`: JSON over HTTP against a REST resource
//!
//! Which one runs is decided once at startup by [`EquipmentRepositoryFactory`].

pub mod fake;
pub mod http;

use std::sync::Arc;

use assetdesk_common::{resolve_api_url, AppConfig, Error, Result};

use crate::domain::entities::Equipment;

pub use fake::{FakeEquipmentRepository, FakeOutcome, FakeRepositoryBehavior};
pub use http::HttpEquipmentRepository;

/// Equipment repository contract shared by every backend
#[async_trait::async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// The complete current collection, in backend order
    async fn find_all(&self) -> Result<Vec<Equipment>>;

    /// `None` when no record has this id
    async fn find_by_id(&self, id: &str) -> Result<Option<Equipment>>;

    /// Persist a new record and return the stored copy, whose id may have
    /// been assigned by the backend.
    async fn create(&self, equipment: Equipment) -> Result<Equipment>;

    /// Replace the record with the same id and return the stored copy
    async fn update(&self, equipment: Equipment) -> Result<Equipment>;

    /// Remove a record; unknown ids are not an error
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Repository selection and backend settings
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryConfig {
    pub use_fake_api: bool,
    pub api_url: String,
    pub endpoint: String,
    pub fake_latency_ms: u64,
}

impl RepositoryConfig {
    /// Endpoint with `/api` paths resolved against `api_url`
    pub fn endpoint_url(&self) -> String {
        resolve_api_url(&self.api_url, &self.endpoint)
    }
}

impl From<&AppConfig> for RepositoryConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            use_fake_api: config.use_fake_api,
            api_url: config.api_url.clone(),
            endpoint: config.equipment_endpoint.clone(),
            fake_latency_ms: config.fake_latency_ms,
        }
    }
}

/// Factory for creating EquipmentRepository implementations
pub struct EquipmentRepositoryFactory;

impl EquipmentRepositoryFactory {
    pub fn create(config: &RepositoryConfig) -> Result<Arc<dyn EquipmentRepository>> {
        if config.use_fake_api {
            tracing::info!(
                latency_ms = config.fake_latency_ms,
                "Creating fake equipment repository"
            );
            let repository = FakeEquipmentRepository::seeded()?;
            repository.behavior().set_latency_ms(config.fake_latency_ms);
            return Ok(Arc::new(repository));
        }

        if config.endpoint.trim().is_empty() {
            return Err(Error::Configuration(
                "An equipment endpoint is required for the HTTP repository".to_string(),
            ));
        }

        let endpoint = config.endpoint_url();
        tracing::info!(endpoint = %endpoint, "Creating HTTP equipment repository");
        Ok(Arc::new(HttpEquipmentRepository::new(&endpoint)?))
    }
}
