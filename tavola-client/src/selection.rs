//! Table selection state
//!
//! Remembers which table the back office is editing. Nothing is persisted
//! and the id is not checked against the backend.

use shared::EntityId;

/// Selected table id; starts unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    table_id: Option<EntityId>,
}

impl SelectionStore {
    /// Creates a store with no table selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a table for editing.
    pub fn set_table_id(&mut self, id: EntityId) {
        self.table_id = Some(id);
    }

    /// Ends the edit flow.
    pub fn clear_table_id(&mut self) {
        self.table_id = None;
    }

    /// Returns the selected table id, if any.
    pub fn table_id(&self) -> Option<EntityId> {
        self.table_id
    }

    pub fn is_editing(&self) -> bool {
        self.table_id.is_some()
    }
}
