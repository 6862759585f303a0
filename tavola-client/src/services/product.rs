//! Product endpoints (`product;`)

use shared::EntityId;
use shared::models::{PRODUCT_PATH, Product, ProductForm};

use crate::error::ClientResult;
use crate::resource::{Resource, ResourceService};

impl Resource for Product {
    const PATH: &'static str = PRODUCT_PATH;
    type Record = Product;
    type Form = ProductForm;
}

pub type ProductService = ResourceService<Product>;

impl ResourceService<Product> {
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.list().await
    }

    pub async fn product_by_id(&self, id: EntityId) -> ClientResult<Product> {
        self.get(id).await
    }

    pub async fn create_product(&self, form: &ProductForm) -> ClientResult<Product> {
        self.create(form).await
    }

    pub async fn update_product(
        &self,
        id: EntityId,
        form: &ProductForm,
    ) -> ClientResult<Product> {
        self.update(id, form).await
    }

    pub async fn delete_product(&self, id: EntityId) -> ClientResult<serde_json::Value> {
        self.delete(id).await
    }
}
