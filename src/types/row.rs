use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Row identity. Assigned by the data source at creation, never reused.
pub type RowId = u32;

/// Lifecycle status of a row. Fixed at creation and not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RowStatus {
    Active,
    Inactive,
}

impl RowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RowStatus::Active => "Active",
            RowStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowRecord {
    /// Immutable, unique identity.
    pub id: RowId,
    pub name: String,
    pub role: String,
    pub status: RowStatus,
}

impl RowRecord {
    /// Text representation of one field, as shown to (and edited by) the user.
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.to_string(),
            Field::Name => self.name.clone(),
            Field::Role => self.role.clone(),
            Field::Status => self.status.to_string(),
        }
    }
}

/// Column identifiers of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Name,
    Role,
    Status,
}

impl Field {
    /// All columns in display order.
    pub const ALL: [Field; 4] = [Field::Id, Field::Name, Field::Role, Field::Status];

    /// Whether inline editing is allowed on this column.
    /// Identity and status are read-only.
    pub fn is_editable(self) -> bool {
        matches!(self, Field::Name | Field::Role)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Role => "role",
            Field::Status => "status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "role" => Ok(Field::Role),
            "status" => Ok(Field::Status),
            other => Err(GridError::UnknownColumn(other.to_string())),
        }
    }
}
