//! List filters for the equipment views

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use assetdesk_common::Error;

use crate::domain::entities::{Equipment, EquipmentStatus, EquipmentType};

/// Either every value, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<T: FromStr<Err = Error>> FromStr for Selection<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Free-text query plus status and type selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentFilter {
    pub query: String,
    pub status: Selection<EquipmentStatus>,
    pub equipment_type: Selection<EquipmentType>,
}

impl EquipmentFilter {
    /// Items passing every criterion, in their original order.
    ///
    /// The query matches case-insensitively anywhere in the asset tag,
    /// serial number or model; an empty query matches everything.
    pub fn apply<'a>(&self, items: &'a [Equipment]) -> Vec<&'a Equipment> {
        let query = self.query.to_lowercase();
        items
            .iter()
            .filter(|equipment| self.admits(equipment, &query))
            .collect()
    }

    fn admits(&self, equipment: &Equipment, lowercase_query: &str) -> bool {
        let by_query = lowercase_query.is_empty()
            || [
                equipment.asset_tag(),
                equipment.serial_number(),
                equipment.model(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(lowercase_query));

        by_query
            && self.status.admits(&equipment.status())
            && self.equipment_type.admits(&equipment.equipment_type())
    }
}
