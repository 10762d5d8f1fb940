//! Handlers for the `/meal-plans` resource.
//!
//! Most rows are created by the entry cascade; these endpoints cover the
//! manual path (ad-hoc rows, flag adjustments, removals). Duplicate
//! guest/date pairs surface as 409 via the unique constraint.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use veranda_core::error::CoreError;
use veranda_core::types::DbId;
use veranda_db::models::meal_plan::{CreateMealPlan, MealPlan, MealPlanListQuery, UpdateMealPlan};
use veranda_db::repositories::MealPlanRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/meal-plans
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMealPlan>,
) -> AppResult<(StatusCode, Json<MealPlan>)> {
    let plan = MealPlanRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/meal-plans
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MealPlanListQuery>,
) -> AppResult<Json<DataResponse<Vec<MealPlan>>>> {
    let plans = MealPlanRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: plans }))
}

/// GET /api/v1/meal-plans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MealPlan>> {
    let plan = MealPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MealPlan",
            id,
        }))?;
    Ok(Json(plan))
}

/// PUT /api/v1/meal-plans/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMealPlan>,
) -> AppResult<Json<MealPlan>> {
    let plan = MealPlanRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MealPlan",
            id,
        }))?;
    Ok(Json(plan))
}

/// DELETE /api/v1/meal-plans/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MealPlanRepo::hard_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MealPlan",
            id,
        }))
    }
}
