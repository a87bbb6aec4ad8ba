//! Fake Equipment Repository Implementation
//!
//! In-memory repository for running without a backend:
//! - `FakeEquipmentRepository`: seeded collection behind a mutex
//! - `FakeRepositoryBehavior`: controls simulated latency and failures
//! - `FakeOutcome`: Succeed, or Fail with a message

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use assetdesk_common::{Error, Result};

use crate::domain::entities::Equipment;
use crate::repository::EquipmentRepository;

/// Simulated round-trip time of a backend call
pub const DEFAULT_LATENCY_MS: u64 = 100;

const SEED_INVENTORY: &str = include_str!("seed_inventory.json");

/// What outcome every fake call should produce
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FakeOutcome {
    #[default]
    Succeed,
    /// Fail every call with this backend message
    Fail(String),
}

/// Programmable behavior for the fake repository
#[derive(Debug, Clone)]
pub struct FakeRepositoryBehavior {
    latency_ms: Arc<RwLock<u64>>,
    outcome: Arc<RwLock<FakeOutcome>>,
}

impl Default for FakeRepositoryBehavior {
    fn default() -> Self {
        Self {
            latency_ms: Arc::new(RwLock::new(DEFAULT_LATENCY_MS)),
            outcome: Arc::new(RwLock::new(FakeOutcome::Succeed)),
        }
    }
}

impl FakeRepositoryBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the delay before each call completes
    pub fn set_latency_ms(&self, latency_ms: u64) {
        *self
            .latency_ms
            .write()
            .unwrap_or_else(PoisonError::into_inner) = latency_ms;
    }

    /// Configure the outcome of subsequent calls
    pub fn set_outcome(&self, outcome: FakeOutcome) {
        *self.outcome.write().unwrap_or_else(PoisonError::into_inner) = outcome;
    }

    /// Reset to default behavior
    pub fn reset(&self) {
        self.set_latency_ms(DEFAULT_LATENCY_MS);
        self.set_outcome(FakeOutcome::Succeed);
    }

    pub fn latency_ms(&self) -> u64 {
        *self.latency_ms.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn outcome(&self) -> FakeOutcome {
        self.outcome
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// In-memory equipment repository.
///
/// Reads hand out clones, so nothing outside ever aliases the stored
/// collection.
#[derive(Debug, Clone)]
pub struct FakeEquipmentRepository {
    items: Arc<Mutex<Vec<Equipment>>>,
    behavior: Arc<FakeRepositoryBehavior>,
}

impl FakeEquipmentRepository {
    /// Repository holding exactly `items`
    fn with_items(items: Vec<Equipment>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            behavior: Arc::new(FakeRepositoryBehavior::new()),
        }
    }

    /// Repository preloaded with the six-item demo inventory (ids "1".."6")
    pub fn seeded() -> Result<Self> {
        let items: Vec<Equipment> = serde_json::from_str(SEED_INVENTORY)?;
        Ok(Self::with_items(items))
    }

    /// Shared behavior for test configuration
    pub fn behavior(&self) -> &Arc<FakeRepositoryBehavior> {
        &self.behavior
    }

    /// Current stored collection
    pub fn snapshot(&self) -> Result<Vec<Equipment>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Equipment>>> {
        self.items
            .lock()
            .map_err(|e| Error::Unexpected(anyhow::anyhow!("equipment lock poisoned: {e}")))
    }

    /// Wait out the simulated latency, then apply the configured outcome
    async fn round_trip(&self, operation: &str) -> Result<()> {
        let latency_ms = self.behavior.latency_ms();
        if latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(latency_ms)).await;
        }

        match self.behavior.outcome() {
            FakeOutcome::Succeed => Ok(()),
            FakeOutcome::Fail(message) => {
                tracing::debug!(operation, "Fake repository: simulating failure");
                Err(Error::Backend(message))
            }
        }
    }
}

#[async_trait::async_trait]
impl EquipmentRepository for FakeEquipmentRepository {
    async fn find_all(&self) -> Result<Vec<Equipment>> {
        self.round_trip("find_all").await?;
        let items = self.snapshot()?;
        tracing::debug!(count = items.len(), "Fake repository: listing equipment");
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Equipment>> {
        self.round_trip("find_by_id").await?;
        Ok(self.lock()?.iter().find(|e| e.id() == id).cloned())
    }

    async fn create(&self, equipment: Equipment) -> Result<Equipment> {
        self.round_trip("create").await?;

        let mut items = self.lock()?;
        let taken = equipment.id().trim().is_empty()
            || items.iter().any(|e| e.id() == equipment.id());
        // Ids stay unique: blank or colliding ids get a fresh one
        let created = if taken {
            equipment.with_id(uuid::Uuid::new_v4().to_string())
        } else {
            equipment
        };

        tracing::debug!(id = %created.id(), "Fake repository: creating equipment");
        items.push(created.clone());
        Ok(created)
    }

    async fn update(&self, equipment: Equipment) -> Result<Equipment> {
        self.round_trip("update").await?;

        let mut items = self.lock()?;
        match items.iter_mut().find(|e| e.id() == equipment.id()) {
            Some(slot) => *slot = equipment.clone(),
            None => {
                tracing::debug!(id = %equipment.id(), "Fake repository: update of unknown id ignored")
            }
        }
        Ok(equipment)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.round_trip("delete").await?;
        self.lock()?.retain(|e| e.id() != id);
        Ok(())
    }
}
