//! Catalog services
//!
//! Each service is a [`ResourceService`](crate::resource::ResourceService)
//! over one backend collection, with method names matching the back-office
//! vocabulary.

pub mod category;
pub mod product;
pub mod table;

pub use category::CategoryService;
pub use product::ProductService;
pub use table::TableService;

use crate::session::SharedClient;

impl SharedClient {
    pub fn categories(&self) -> CategoryService {
        CategoryService::new(self.clone())
    }

    pub fn products(&self) -> ProductService {
        ProductService::new(self.clone())
    }

    pub fn tables(&self) -> TableService {
        TableService::new(self.clone())
    }
}
