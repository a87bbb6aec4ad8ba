//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;

use crate::{Error, Result};

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_EQUIPMENT_ENDPOINT: &str = "/api/equipment";
const DEFAULT_FAKE_LATENCY_MS: u64 = 100;
const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Production mode switches logging to JSON output
    pub production: bool,

    /// Base URL prepended to `/api` request paths
    pub api_url: String,

    /// Select the in-memory fake repository instead of the HTTP one
    pub use_fake_api: bool,

    /// Equipment resource path or absolute URL
    pub equipment_endpoint: String,

    /// Simulated latency of the fake repository
    pub fake_latency_ms: u64,

    /// Initial page size of the equipment list
    pub page_size: usize,

    /// Runtime configuration
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            production: false,
            api_url: DEFAULT_API_URL.to_string(),
            use_fake_api: true,
            equipment_endpoint: DEFAULT_EQUIPMENT_ENDPOINT.to_string(),
            fake_latency_ms: DEFAULT_FAKE_LATENCY_MS,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults; present but malformed values are
    /// rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            production: match lookup("ASSETDESK_PRODUCTION") {
                Some(raw) => parse_bool("ASSETDESK_PRODUCTION", &raw)?,
                None => defaults.production,
            },
            api_url: lookup("ASSETDESK_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            use_fake_api: match lookup("ASSETDESK_USE_FAKE_API") {
                Some(raw) => parse_bool("ASSETDESK_USE_FAKE_API", &raw)?,
                None => defaults.use_fake_api,
            },
            equipment_endpoint: lookup("ASSETDESK_EQUIPMENT_ENDPOINT")
                .unwrap_or(defaults.equipment_endpoint),
            fake_latency_ms: match lookup("ASSETDESK_FAKE_LATENCY_MS") {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    Error::Configuration(format!(
                        "ASSETDESK_FAKE_LATENCY_MS must be a number of milliseconds, got '{}'",
                        raw
                    ))
                })?,
                None => defaults.fake_latency_ms,
            },
            page_size: match lookup("ASSETDESK_PAGE_SIZE") {
                Some(raw) => match raw.trim().parse::<usize>() {
                    Ok(size) if size > 0 => size,
                    _ => {
                        return Err(Error::Configuration(format!(
                            "ASSETDESK_PAGE_SIZE must be a positive integer, got '{}'",
                            raw
                        )))
                    }
                },
                None => defaults.page_size,
            },
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        Ok(config)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(Error::Configuration(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}
