//! HTTP Equipment Repository Implementation
//!
//! Talks to a REST resource holding equipment records:
//! `GET {endpoint}`, `GET|PUT|DELETE {endpoint}/{id}`, `POST {endpoint}`.

use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use assetdesk_common::{Error, Result};

use crate::domain::entities::Equipment;
use crate::repository::EquipmentRepository;

/// Equipment repository backed by a JSON REST endpoint
#[derive(Debug, Clone)]
pub struct HttpEquipmentRepository {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpEquipmentRepository {
    /// Create a repository for an absolute endpoint URL
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a repository sharing an existing HTTP client
    pub fn with_client(http: reqwest::Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            Error::Configuration(format!("Invalid equipment endpoint '{}': {}", endpoint, e))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "Equipment endpoint '{}' cannot hold record paths",
                endpoint
            )));
        }
        Ok(Self { http, endpoint })
    }

    fn record_url(&self, id: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    async fn send(&self, request: reqwest::RequestBuilder, context: &str) -> Result<Response> {
        request
            .send()
            .await
            .map_err(|e| Error::Backend(format!("{} failed: {}", context, e)))
    }

    /// Turn a non-success status into a backend error carrying the body
    async fn ensure_success(response: Response, context: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());
        Err(Error::Backend(format!(
            "{} returned {}: {}",
            context, status, body
        )))
    }

    async fn read_body(response: Response, context: &str) -> Result<String> {
        response
            .text()
            .await
            .map_err(|e| Error::Backend(format!("{} body could not be read: {}", context, e)))
    }

    async fn decode<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
        let body = Self::read_body(response, context).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Decode a returned record, falling back to the submitted one when the
    /// backend answers without a body.
    async fn decode_or(response: Response, context: &str, submitted: Equipment) -> Result<Equipment> {
        let body = Self::read_body(response, context).await?;
        if body.trim().is_empty() {
            return Ok(submitted);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl EquipmentRepository for HttpEquipmentRepository {
    async fn find_all(&self) -> Result<Vec<Equipment>> {
        let context = format!("GET {}", self.endpoint);
        let response = self.send(self.http.get(self.endpoint.clone()), &context).await?;
        let response = Self::ensure_success(response, &context).await?;
        let items: Vec<Equipment> = Self::decode(response, &context).await?;

        tracing::debug!(count = items.len(), "Equipment listed from backend");
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Equipment>> {
        let url = self.record_url(id);
        let context = format!("GET {}", url);
        let response = self.send(self.http.get(url), &context).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::ensure_success(response, &context).await?;
        Ok(Some(Self::decode(response, &context).await?))
    }

    async fn create(&self, equipment: Equipment) -> Result<Equipment> {
        let context = format!("POST {}", self.endpoint);
        // The backend assigns the id of new records
        let request = self
            .http
            .post(self.endpoint.clone())
            .json(&equipment.to_record(false));
        let response = self.send(request, &context).await?;
        let response = Self::ensure_success(response, &context).await?;
        let created = Self::decode_or(response, &context, equipment).await?;

        tracing::debug!(id = %created.id(), "Equipment created on backend");
        Ok(created)
    }

    async fn update(&self, equipment: Equipment) -> Result<Equipment> {
        let url = self.record_url(equipment.id());
        let context = format!("PUT {}", url);
        let request = self.http.put(url).json(&equipment.to_record(true));
        let response = self.send(request, &context).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!(
                "Equipment {} not found",
                equipment.id()
            )));
        }

        let response = Self::ensure_success(response, &context).await?;
        let updated = Self::decode_or(response, &context, equipment).await?;

        tracing::debug!(id = %updated.id(), "Equipment updated on backend");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.record_url(id);
        let context = format!("DELETE {}", url);
        let response = self.send(self.http.delete(url), &context).await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(id, "Equipment already absent on backend");
            return Ok(());
        }

        Self::ensure_success(response, &context).await?;
        Ok(())
    }
}
