//! Equipment domain: inventory records, repositories, list store

pub mod application;
pub mod domain;
pub mod repository;
pub mod state;

// Re-export the main types at the crate root for convenience
pub use application::LoadEquipmentList;
pub use domain::entities::{Equipment, EquipmentStatus, EquipmentType, Metadata};
pub use domain::input::{DateInput, EquipmentInput, MetadataInput, RecordId};
pub use repository::{
    EquipmentRepository, EquipmentRepositoryFactory, FakeEquipmentRepository, FakeOutcome,
    FakeRepositoryBehavior, HttpEquipmentRepository, RepositoryConfig,
};
pub use state::{EquipmentFilter, EquipmentStore, Selection, StoreState};
