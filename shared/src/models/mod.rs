//! Data models
//!
//! Read models hold the JSON the backend returned, untouched, and expose the
//! known fields through accessors. Write payloads (`*Form`) describe the
//! multipart fields sent on create and update.

pub mod category;
pub mod dining_table;
pub mod form;
pub mod product;
mod record;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use form::*;
pub use product::*;
