//! Common types for the shared crate

/// Backend-assigned resource identifier.
///
/// Ids are owned by the backend; the client never generates or checks them.
pub type EntityId = i64;
