//! Tavola Client - HTTP client for the back-office backend
//!
//! Typed access to the category, product and table endpoints, the session
//! token that authorizes them, and the table-selection state of the editor.

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod resource;
pub mod selection;
pub mod services;
pub mod session;
pub mod storage;

pub use config::{ClientConfig, PathStyle};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use resource::{Resource, ResourceService};
pub use selection::SelectionStore;
pub use services::{CategoryService, ProductService, TableService};
pub use session::SharedClient;
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};

// Re-export shared types for convenience
pub use shared::EntityId;
pub use shared::models::{
    Category, CategoryForm, DiningTable, DiningTableForm, ImageUpload, Product, ProductForm,
};
