//! Handlers for the `/escort-officers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::escort_officer::{CreateEscortOfficer, EscortOfficer, UpdateEscortOfficer};
use veranda_db::repositories::EscortOfficerRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/escort-officers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEscortOfficer>,
) -> AppResult<(StatusCode, Json<EscortOfficer>)> {
    let officer = EscortOfficerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(officer)))
}

/// GET /api/v1/escort-officers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<EscortOfficer>>>> {
    let officers = EscortOfficerRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: officers }))
}

/// GET /api/v1/escort-officers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EscortOfficer>> {
    let officer = EscortOfficerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EscortOfficer",
            id,
        }))?;
    Ok(Json(officer))
}

/// PUT /api/v1/escort-officers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEscortOfficer>,
) -> AppResult<Json<EscortOfficer>> {
    let officer = EscortOfficerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EscortOfficer",
            id,
        }))?;
    Ok(Json(officer))
}

/// DELETE /api/v1/escort-officers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EscortOfficerRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "EscortOfficer",
            id,
        }))
    }
}
