//! Repository for the `meal_plans` table.
//!
//! Rows arrive two ways: the entry cascade upserts one for the day a guest
//! enters, and staff create/adjust rows manually. Plans are derived data,
//! so deletion is a hard delete.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use veranda_core::types::DbId;

use crate::models::meal_plan::{CreateMealPlan, MealPlan, MealPlanListQuery, UpdateMealPlan};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, guest_id, plan_date, breakfast, lunch, dinner, \
    dietary_notes, source_visit_id, created_at, updated_at";

/// Maximum page size for meal plan listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for meal plan listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD and cascade-upsert operations for meal plans.
pub struct MealPlanRepo;

impl MealPlanRepo {
    /// Manually create a meal plan row. Meal flags default to true.
    pub async fn create(pool: &PgPool, input: &CreateMealPlan) -> Result<MealPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO meal_plans (guest_id, plan_date, breakfast, lunch, dinner, dietary_notes)
             VALUES ($1, $2, COALESCE($3, true), COALESCE($4, true), COALESCE($5, true), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MealPlan>(&query)
            .bind(input.guest_id)
            .bind(input.plan_date)
            .bind(input.breakfast)
            .bind(input.lunch)
            .bind(input.dinner)
            .bind(&input.dietary_notes)
            .fetch_one(pool)
            .await
    }

    /// Cascade upsert: insert the day's plan for a guest unless a row for
    /// `(guest_id, plan_date)` already exists (manual or from an earlier
    /// cascade), which is left untouched.
    ///
    /// Returns the inserted row, or `None` when the conflict arm fired.
    pub async fn upsert_for_entry(
        conn: &mut PgConnection,
        guest_id: DbId,
        plan_date: NaiveDate,
        dietary_notes: Option<&str>,
        source_visit_id: DbId,
    ) -> Result<Option<MealPlan>, sqlx::Error> {
        let query = format!(
            "INSERT INTO meal_plans (guest_id, plan_date, dietary_notes, source_visit_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (guest_id, plan_date) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MealPlan>(&query)
            .bind(guest_id)
            .bind(plan_date)
            .bind(dietary_notes)
            .bind(source_visit_id)
            .fetch_optional(conn)
            .await
    }

    /// Find a meal plan by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MealPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meal_plans WHERE id = $1");
        sqlx::query_as::<_, MealPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the plan for a specific guest and date, if any.
    pub async fn find_for_guest_date(
        pool: &PgPool,
        guest_id: DbId,
        plan_date: NaiveDate,
    ) -> Result<Option<MealPlan>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM meal_plans WHERE guest_id = $1 AND plan_date = $2");
        sqlx::query_as::<_, MealPlan>(&query)
            .bind(guest_id)
            .bind(plan_date)
            .fetch_optional(pool)
            .await
    }

    /// List meal plans with optional date/guest filters and pagination.
    pub async fn list(
        pool: &PgPool,
        params: &MealPlanListQuery,
    ) -> Result<Vec<MealPlan>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        // Build the WHERE clause and track the next bind parameter index.
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if params.date.is_some() {
            conditions.push(format!("plan_date = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.guest_id.is_some() {
            conditions.push(format!("guest_id = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM meal_plans \
             {where_clause} \
             ORDER BY plan_date DESC, guest_id ASC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, MealPlan>(&query);
        if let Some(date) = params.date {
            q = q.bind(date);
        }
        if let Some(guest_id) = params.guest_id {
            q = q.bind(guest_id);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Adjust flags and notes. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMealPlan,
    ) -> Result<Option<MealPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE meal_plans SET
                breakfast = COALESCE($2, breakfast),
                lunch = COALESCE($3, lunch),
                dinner = COALESCE($4, dinner),
                dietary_notes = COALESCE($5, dietary_notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MealPlan>(&query)
            .bind(id)
            .bind(input.breakfast)
            .bind(input.lunch)
            .bind(input.dinner)
            .bind(&input.dietary_notes)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a meal plan row. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meal_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
