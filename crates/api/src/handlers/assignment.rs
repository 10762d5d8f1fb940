//! Handlers for the `/assignments` resource.
//!
//! All mutations go through [`veranda_db::services::AssignmentService`],
//! which owns locking, overlap checking, and reference allocation. Reads
//! hit the repository directly.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::assignment::{
    Assignment, AssignmentListQuery, CreateAssignment, Reassign, UpdateAssignment,
};
use veranda_db::repositories::AssignmentRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/assignments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let assignment = state.assignments.create(&input).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/v1/assignments
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AssignmentListQuery>,
) -> AppResult<Json<DataResponse<Vec<Assignment>>>> {
    let assignments = AssignmentRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: assignments }))
}

/// GET /api/v1/assignments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assignment>> {
    let assignment = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Assignment",
            id,
        }))?;
    Ok(Json(assignment))
}

/// PUT /api/v1/assignments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssignment>,
) -> AppResult<Json<Assignment>> {
    let assignment = state.assignments.update(id, &input).await?;
    Ok(Json(assignment))
}

/// POST /api/v1/assignments/{id}/release
pub async fn release(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assignment>> {
    let assignment = state.assignments.release(id).await?;
    Ok(Json(assignment))
}

/// POST /api/v1/assignments/{id}/reassign
pub async fn reassign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Reassign>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let replacement = state.assignments.reassign(id, &input).await?;
    Ok((StatusCode::CREATED, Json(replacement)))
}
