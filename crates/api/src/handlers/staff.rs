//! Handlers for the `/staff` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::staff::{CreateStaff, Staff, UpdateStaff};
use veranda_db::repositories::StaffRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/staff
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    let staff = StaffRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

/// GET /api/v1/staff
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Staff>>>> {
    let staff = StaffRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: staff }))
}

/// GET /api/v1/staff/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Staff>> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Staff",
            id,
        }))?;
    Ok(Json(staff))
}

/// PUT /api/v1/staff/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaff>,
) -> AppResult<Json<Staff>> {
    let staff = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Staff",
            id,
        }))?;
    Ok(Json(staff))
}

/// DELETE /api/v1/staff/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StaffRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Staff",
            id,
        }))
    }
}
