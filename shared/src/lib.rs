//! Shared types for the Tavola back office
//!
//! Wire models for the catalog resources (categories, products, dining
//! tables) exchanged with the backend, together with the multipart form
//! payloads used to create and update them.

pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::EntityId;
