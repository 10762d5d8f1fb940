//! Handlers for the `/guests` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::guest::{CreateGuest, Guest, UpdateGuest};
use veranda_db::repositories::GuestRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/guests
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGuest>,
) -> AppResult<(StatusCode, Json<Guest>)> {
    let guest = GuestRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(guest)))
}

/// GET /api/v1/guests
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Guest>>>> {
    let guests = GuestRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: guests }))
}

/// GET /api/v1/guests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Guest>> {
    let guest = GuestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id,
        }))?;
    Ok(Json(guest))
}

/// PUT /api/v1/guests/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGuest>,
) -> AppResult<Json<Guest>> {
    let guest = GuestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id,
        }))?;
    Ok(Json(guest))
}

/// DELETE /api/v1/guests/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GuestRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id,
        }))
    }
}
