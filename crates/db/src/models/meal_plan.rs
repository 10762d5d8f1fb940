//! Meal plan model and DTOs.
//!
//! One row per guest per calendar date. Rows are created either by the
//! entry cascade (with `source_visit_id` set) or manually via the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `meal_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MealPlan {
    pub id: DbId,
    pub guest_id: DbId,
    pub plan_date: NaiveDate,
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
    pub dietary_notes: Option<String>,
    pub source_visit_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for manually creating a meal plan row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMealPlan {
    pub guest_id: DbId,
    pub plan_date: NaiveDate,
    pub breakfast: Option<bool>,
    pub lunch: Option<bool>,
    pub dinner: Option<bool>,
    pub dietary_notes: Option<String>,
}

/// DTO for adjusting a meal plan. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMealPlan {
    pub breakfast: Option<bool>,
    pub lunch: Option<bool>,
    pub dinner: Option<bool>,
    pub dietary_notes: Option<String>,
}

/// Query parameters for `GET /api/v1/meal-plans`.
#[derive(Debug, Clone, Deserialize)]
pub struct MealPlanListQuery {
    pub date: Option<NaiveDate>,
    pub guest_id: Option<DbId>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}
