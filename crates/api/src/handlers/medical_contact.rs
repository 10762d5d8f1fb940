//! Handlers for the `/medical-contacts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::medical_contact::{
    CreateMedicalContact, MedicalContact, UpdateMedicalContact,
};
use veranda_db::repositories::MedicalContactRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/medical-contacts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMedicalContact>,
) -> AppResult<(StatusCode, Json<MedicalContact>)> {
    let contact = MedicalContactRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/v1/medical-contacts
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<MedicalContact>>>> {
    let contacts = MedicalContactRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: contacts }))
}

/// GET /api/v1/medical-contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MedicalContact>> {
    let contact = MedicalContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MedicalContact",
            id,
        }))?;
    Ok(Json(contact))
}

/// PUT /api/v1/medical-contacts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMedicalContact>,
) -> AppResult<Json<MedicalContact>> {
    let contact = MedicalContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MedicalContact",
            id,
        }))?;
    Ok(Json(contact))
}

/// DELETE /api/v1/medical-contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MedicalContactRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MedicalContact",
            id,
        }))
    }
}
