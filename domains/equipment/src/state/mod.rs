//! Observable list state for the equipment views

pub mod filters;
pub mod store;

pub use filters::{EquipmentFilter, Selection};
pub use store::{EquipmentStore, StoreState};
