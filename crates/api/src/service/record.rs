//! Business rules for the record entity.
//!
//! The rules are thin: update is a full-field replacement of an existing
//! row, delete checks existence so the caller gets a boolean outcome.
//! Everything else passes straight through to [`RecordRepo`].

use roster_core::types::DbId;
use roster_db::models::record::{CreateRecord, Record, UpdateRecord};
use roster_db::repositories::RecordRepo;
use sqlx::PgPool;

/// Provides the record operations the HTTP layer calls into.
pub struct RecordService;

impl RecordService {
    /// Persist a new record, returning it with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateRecord) -> Result<Record, sqlx::Error> {
        RecordRepo::create(pool, input).await
    }

    /// Look up a record by id.
    pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<Option<Record>, sqlx::Error> {
        RecordRepo::find_by_id(pool, id).await
    }

    /// List every record in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Record>, sqlx::Error> {
        RecordRepo::find_all(pool).await
    }

    /// Replace the name, email, and department of an existing record.
    ///
    /// Returns `None` when the id does not exist; there is no upsert.
    /// The existence check and the overwrite execute as one statement,
    /// so concurrent updates to the same id race last-write-wins.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecord,
    ) -> Result<Option<Record>, sqlx::Error> {
        RecordRepo::update(pool, id, input).await
    }

    /// Delete a record by id.
    ///
    /// Returns `false` without touching storage when the id is absent,
    /// `true` after removal when it was present.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        if !RecordRepo::exists_by_id(pool, id).await? {
            return Ok(false);
        }
        RecordRepo::delete_by_id(pool, id).await?;
        Ok(true)
    }
}
