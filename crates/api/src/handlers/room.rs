//! Handlers for the `/rooms` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::room::{CreateRoom, Room, UpdateRoom};
use veranda_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/rooms
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let room = RoomRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/v1/rooms
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Room>>>> {
    let rooms = RoomRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: rooms }))
}

/// GET /api/v1/rooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Room>> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(room))
}

/// PUT /api/v1/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(room))
}

/// DELETE /api/v1/rooms/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RoomRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Room", id }))
    }
}
