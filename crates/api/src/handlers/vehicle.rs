//! Handlers for the `/vehicles` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use veranda_db::repositories::VehicleRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/vehicles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/v1/vehicles
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Vehicle>>>> {
    let vehicles = VehicleRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: vehicles }))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// PUT /api/v1/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// DELETE /api/v1/vehicles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VehicleRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))
    }
}
