//! Load the full equipment list

use std::sync::Arc;

use assetdesk_common::Result;

use crate::domain::entities::Equipment;
use crate::repository::EquipmentRepository;

/// Fetches every equipment record from the configured repository
#[derive(Clone)]
pub struct LoadEquipmentList {
    repository: Arc<dyn EquipmentRepository>,
}

impl LoadEquipmentList {
    pub fn new(repository: Arc<dyn EquipmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Equipment>> {
        self.repository.find_all().await
    }
}
