//! Read-only endpoints over recorded visits.

use axum::extract::{Path, Query, State};
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::guest_visit::{GuestVisit, VisitListQuery};
use veranda_db::repositories::GuestVisitRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/visits
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<VisitListQuery>,
) -> AppResult<Json<DataResponse<Vec<GuestVisit>>>> {
    let visits = GuestVisitRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: visits }))
}

/// GET /api/v1/visits/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GuestVisit>> {
    let visit = GuestVisitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GuestVisit",
            id,
        }))?;
    Ok(Json(visit))
}

/// GET /api/v1/guests/{id}/visits
pub async fn list_by_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<GuestVisit>>>> {
    let visits = GuestVisitRepo::list_by_guest(&state.pool, guest_id).await?;
    Ok(Json(DataResponse { data: visits }))
}
