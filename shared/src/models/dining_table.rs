//! Dining Table Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::form::{FormField, MultipartForm};
use super::record::{int_field, opaque_record, str_field};
use crate::types::EntityId;

/// Collection path of the table endpoint (the backend calls tables "desks").
pub const DINING_TABLE_PATH: &str = "desk";

/// Dining table record, kept exactly as the backend sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiningTable(Value);

opaque_record!(DiningTable);

impl DiningTable {
    pub fn id(&self) -> Option<EntityId> {
        int_field(&self.0, "id")
    }

    pub fn name(&self) -> Option<&str> {
        str_field(&self.0, "name")
    }

    /// Seats at the table
    pub fn capacity(&self) -> Option<i64> {
        int_field(&self.0, "capacity")
    }
}

/// Create/update dining table payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiningTableForm {
    pub name: String,
    pub capacity: i32,
}

impl DiningTableForm {
    pub fn new(name: impl Into<String>, capacity: i32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

impl MultipartForm for DiningTableForm {
    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::text("name", &self.name),
            FormField::text("capacity", self.capacity),
        ]
    }
}
