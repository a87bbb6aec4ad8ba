//! Equipment domain model

pub mod entities;
pub mod input;
