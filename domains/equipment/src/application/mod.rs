//! Application use cases for the Equipment domain

pub mod load_list;

pub use load_list::LoadEquipmentList;
