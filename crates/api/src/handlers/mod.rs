//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list,
//! get_by_id, update, delete) for a single entity type. Handlers
//! delegate to the corresponding service and map errors via
//! [`crate::error::AppError`].

pub mod record;
