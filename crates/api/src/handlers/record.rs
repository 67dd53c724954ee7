//! Handlers for the `/records` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::models::record::{CreateRecord, Record, UpdateRecord};

use crate::error::{AppError, AppResult};
use crate::service::RecordService;
use crate::state::AppState;

/// POST /records
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRecord>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let record = RecordService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /records
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    let records = RecordService::list_all(&state.pool).await?;
    Ok(Json(records))
}

/// GET /records/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Record>> {
    let record = RecordService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;
    Ok(Json(record))
}

/// PUT /records/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRecord>,
) -> AppResult<Json<Record>> {
    let record = RecordService::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;
    Ok(Json(record))
}

/// DELETE /records/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = RecordService::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))
    }
}
