//! Raw equipment input as it arrives from forms and backends
//!
//! Ids, dates and metadata come in several shapes. Each shape is
//! normalized exactly once, in [`crate::Equipment::create`].

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use assetdesk_common::{Error, Result};

use crate::domain::entities::{EquipmentStatus, EquipmentType, Metadata};

/// Unvalidated equipment fields in camelCase wire layout
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInput {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub asset_tag: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub model: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub status: EquipmentStatus,
    #[serde(default)]
    pub location_id: String,
    pub purchase_date: DateInput,
    pub warranty_end: DateInput,
    #[serde(default)]
    pub metadata: MetadataInput,
}

/// Record id as sent by backends: JSON servers hand out numbers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(serde_json::Number),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl RecordId {
    pub fn into_string(self) -> String {
        match self {
            RecordId::Text(text) => text,
            RecordId::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::Text(id)
    }
}

/// A calendar date, or text holding one
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl DateInput {
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and offset-less
    /// `YYYY-MM-DDTHH:MM:SS` timestamps. Timestamps keep their UTC date.
    pub fn normalize(self, field: &str) -> Result<NaiveDate> {
        match self {
            DateInput::Date(date) => Ok(date),
            DateInput::Text(text) => parse_date(text.trim()).ok_or_else(|| {
                Error::Validation(format!("{} is not a valid date: '{}'", field, text))
            }),
        }
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

/// Metadata as a JSON object, a list of `[key, value]` entries, or nothing
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum MetadataInput {
    Map(serde_json::Map<String, serde_json::Value>),
    Entries(Vec<(String, serde_json::Value)>),
    #[default]
    Empty,
}

impl MetadataInput {
    /// Later entries win over earlier ones with the same key.
    pub fn normalize(self) -> Metadata {
        match self {
            MetadataInput::Map(map) => map.into_iter().collect(),
            MetadataInput::Entries(entries) => entries.into_iter().collect(),
            MetadataInput::Empty => BTreeMap::new(),
        }
    }
}

impl From<Metadata> for MetadataInput {
    fn from(metadata: Metadata) -> Self {
        MetadataInput::Map(metadata.into_iter().collect())
    }
}

impl From<Vec<(String, serde_json::Value)>> for MetadataInput {
    fn from(entries: Vec<(String, serde_json::Value)>) -> Self {
        MetadataInput::Entries(entries)
    }
}
