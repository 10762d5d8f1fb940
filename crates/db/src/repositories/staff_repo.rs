//! Repository for the `staff` table.

use sqlx::PgPool;
use veranda_core::types::DbId;

use crate::models::staff::{CreateStaff, Staff, UpdateStaff};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, role_title, phone, deleted_at, created_at, updated_at";

/// Maximum page size for staff listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for staff listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD operations for staff members.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (full_name, role_title, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.full_name)
            .bind(&input.role_title)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a staff member by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List staff ordered by name. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff WHERE deleted_at IS NULL
             ORDER BY full_name ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT))
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// Update a staff member. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                full_name = COALESCE($2, full_name),
                role_title = COALESCE($3, role_title),
                phone = COALESCE($4, phone)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.role_title)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a staff member by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE staff SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
