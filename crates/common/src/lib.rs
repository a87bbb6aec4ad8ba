//! Shared utilities, configuration, and error handling for AssetDesk
//!
//! This crate provides common functionality used across the AssetDesk client:
//! - Configuration management following 12-factor principles
//! - Error types and the user-facing error mapper
//! - API URL resolution for backend requests
//! - Page arithmetic for list views

pub mod api_url;
pub mod config;
pub mod error;
pub mod pagination;

pub use api_url::resolve_api_url;
pub use config::AppConfig;
pub use error::{Error, Result, GENERIC_ERROR_MESSAGE};
pub use pagination::Pagination;
