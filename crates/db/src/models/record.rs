//! Record entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `records` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Record {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// DTO for creating a new record. The id is assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecord {
    pub name: String,
    pub email: String,
    pub department: String,
}

/// DTO for replacing an existing record.
///
/// All three mutable fields are required: a PUT replaces them wholesale
/// rather than merging a partial patch. The id is never part of the body.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecord {
    pub name: String,
    pub email: String,
    pub department: String,
}
