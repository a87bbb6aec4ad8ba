//! Domain entities for the Equipment domain
//!
//! `Equipment` is an immutable value object. The only way to build one is
//! [`Equipment::create`] (or deserializing, which goes through it), so every
//! instance has a non-blank asset tag and serial number.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use assetdesk_common::{Error, Result};

use crate::domain::input::EquipmentInput;

/// Free-form equipment attributes (`ram`, `dpi`, ...)
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Equipment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Available,
    InUse,
    InRepair,
    Retired,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 4] = [
        EquipmentStatus::Available,
        EquipmentStatus::InUse,
        EquipmentStatus::InRepair,
        EquipmentStatus::Retired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::InUse => "InUse",
            EquipmentStatus::InRepair => "InRepair",
            EquipmentStatus::Retired => "Retired",
        }
    }

    /// Display label shown in the inventory views
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Disponible",
            EquipmentStatus::InUse => "En uso",
            EquipmentStatus::InRepair => "En reparación",
            EquipmentStatus::Retired => "Retirado",
        }
    }

    /// Available or in use
    pub fn is_active(&self) -> bool {
        matches!(self, EquipmentStatus::Available | EquipmentStatus::InUse)
    }

    /// Anything not retired can still be serviced
    pub fn is_maintainable(&self) -> bool {
        !matches!(self, EquipmentStatus::Retired)
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("Unknown equipment status '{}'", s)))
    }
}

/// Kind of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    Laptop,
    Desktop,
    Printer,
    Monitor,
    Server,
    Accessory,
    Other,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 7] = [
        EquipmentType::Laptop,
        EquipmentType::Desktop,
        EquipmentType::Printer,
        EquipmentType::Monitor,
        EquipmentType::Server,
        EquipmentType::Accessory,
        EquipmentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Laptop => "Laptop",
            EquipmentType::Desktop => "Desktop",
            EquipmentType::Printer => "Printer",
            EquipmentType::Monitor => "Monitor",
            EquipmentType::Server => "Server",
            EquipmentType::Accessory => "Accessory",
            EquipmentType::Other => "Other",
        }
    }

    /// Display label shown in the inventory views
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::Laptop => "Portátil",
            EquipmentType::Desktop => "Escritorio",
            EquipmentType::Printer => "Impresora",
            EquipmentType::Monitor => "Monitor",
            EquipmentType::Server => "Servidor",
            EquipmentType::Accessory => "Accesorio",
            EquipmentType::Other => "Otro",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("Unknown equipment type '{}'", s)))
    }
}

/// Equipment entity
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "EquipmentInput")]
pub struct Equipment {
    id: String,
    asset_tag: String,
    serial_number: String,
    model: String,
    equipment_type: EquipmentType,
    status: EquipmentStatus,
    location_id: String,
    purchase_date: NaiveDate,
    warranty_end: NaiveDate,
    metadata: Metadata,
}

impl Equipment {
    /// Create equipment from raw input, normalizing ids, dates and metadata
    pub fn create(input: EquipmentInput) -> Result<Self> {
        if input.asset_tag.trim().is_empty() {
            return Err(Error::Validation("assetTag must not be empty".to_string()));
        }
        if input.serial_number.trim().is_empty() {
            return Err(Error::Validation(
                "serialNumber must not be empty".to_string(),
            ));
        }

        Ok(Equipment {
            id: input.id.into_string(),
            asset_tag: input.asset_tag,
            serial_number: input.serial_number,
            model: input.model,
            equipment_type: input.equipment_type,
            status: input.status,
            location_id: input.location_id,
            purchase_date: input.purchase_date.normalize("purchaseDate")?,
            warranty_end: input.warranty_end.normalize("warrantyEnd")?,
            metadata: input.metadata.normalize(),
        })
    }

    /// Copy of this record under another id
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Equipment {
            id: id.into(),
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn asset_tag(&self) -> &str {
        &self.asset_tag
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn equipment_type(&self) -> EquipmentType {
        self.equipment_type
    }

    pub fn status(&self) -> EquipmentStatus {
        self.status
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn warranty_end(&self) -> NaiveDate {
        self.warranty_end
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn can_be_maintained(&self) -> bool {
        self.status.is_maintainable()
    }

    /// Wire form of this record; `include_id = false` leaves the id for the
    /// backend to assign.
    pub(crate) fn to_record(&self, include_id: bool) -> EquipmentRecord<'_> {
        EquipmentRecord {
            id: include_id.then_some(self.id.as_str()),
            asset_tag: &self.asset_tag,
            serial_number: &self.serial_number,
            model: &self.model,
            equipment_type: self.equipment_type,
            status: self.status,
            location_id: &self.location_id,
            purchase_date: self.purchase_date,
            warranty_end: self.warranty_end,
            metadata: &self.metadata,
        }
    }
}

impl TryFrom<EquipmentInput> for Equipment {
    type Error = Error;

    fn try_from(input: EquipmentInput) -> Result<Self> {
        Equipment::create(input)
    }
}

impl Serialize for Equipment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record(true).serialize(serializer)
    }
}

/// Borrowed camelCase wire layout of an equipment record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EquipmentRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    asset_tag: &'a str,
    serial_number: &'a str,
    model: &'a str,
    #[serde(rename = "type")]
    equipment_type: EquipmentType,
    status: EquipmentStatus,
    location_id: &'a str,
    purchase_date: NaiveDate,
    warranty_end: NaiveDate,
    metadata: &'a Metadata,
}
