//! Dining table endpoints (`desk;`)

use shared::EntityId;
use shared::models::{DINING_TABLE_PATH, DiningTable, DiningTableForm};

use crate::error::ClientResult;
use crate::resource::{Resource, ResourceService};

impl Resource for DiningTable {
    const PATH: &'static str = DINING_TABLE_PATH;
    type Record = DiningTable;
    type Form = DiningTableForm;
}

pub type TableService = ResourceService<DiningTable>;

impl ResourceService<DiningTable> {
    pub async fn table_list(&self) -> ClientResult<Vec<DiningTable>> {
        self.list().await
    }

    pub async fn table(&self, id: EntityId) -> ClientResult<DiningTable> {
        self.get(id).await
    }

    pub async fn create_table(&self, form: &DiningTableForm) -> ClientResult<DiningTable> {
        self.create(form).await
    }

    pub async fn update_table(
        &self,
        id: EntityId,
        form: &DiningTableForm,
    ) -> ClientResult<DiningTable> {
        self.update(id, form).await
    }

    pub async fn delete_table(&self, id: EntityId) -> ClientResult<serde_json::Value> {
        self.delete(id).await
    }
}
