//! Handlers for the `/drivers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::driver::{CreateDriver, Driver, UpdateDriver};
use veranda_db::repositories::DriverRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/drivers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDriver>,
) -> AppResult<(StatusCode, Json<Driver>)> {
    let driver = DriverRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

/// GET /api/v1/drivers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Driver>>>> {
    let drivers = DriverRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: drivers }))
}

/// GET /api/v1/drivers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Driver>> {
    let driver = DriverRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Driver",
            id,
        }))?;
    Ok(Json(driver))
}

/// PUT /api/v1/drivers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDriver>,
) -> AppResult<Json<Driver>> {
    let driver = DriverRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Driver",
            id,
        }))?;
    Ok(Json(driver))
}

/// DELETE /api/v1/drivers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DriverRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Driver",
            id,
        }))
    }
}
