//! Category endpoints (`category;`)

use shared::EntityId;
use shared::models::{CATEGORY_PATH, Category, CategoryForm};

use crate::error::ClientResult;
use crate::resource::{Resource, ResourceService};

impl Resource for Category {
    const PATH: &'static str = CATEGORY_PATH;
    type Record = Category;
    type Form = CategoryForm;
}

pub type CategoryService = ResourceService<Category>;

impl ResourceService<Category> {
    pub async fn category_list(&self) -> ClientResult<Vec<Category>> {
        self.list().await
    }

    pub async fn category_by_id(&self, id: EntityId) -> ClientResult<Category> {
        self.get(id).await
    }

    pub async fn create_category(&self, form: &CategoryForm) -> ClientResult<Category> {
        self.create(form).await
    }

    pub async fn update_category(
        &self,
        id: EntityId,
        form: &CategoryForm,
    ) -> ClientResult<Category> {
        self.update(id, form).await
    }

    pub async fn delete_category(&self, id: EntityId) -> ClientResult<serde_json::Value> {
        self.delete(id).await
    }
}
