//! Repository for the `drivers` table.

use sqlx::PgPool;
use veranda_core::types::DbId;

use crate::models::driver::{CreateDriver, Driver, UpdateDriver};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, license_number, phone, deleted_at, created_at, updated_at";

/// Maximum page size for driver listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for driver listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD operations for drivers.
pub struct DriverRepo;

impl DriverRepo {
    /// Insert a new driver, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDriver) -> Result<Driver, sqlx::Error> {
        let query = format!(
            "INSERT INTO drivers (full_name, license_number, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(&input.full_name)
            .bind(&input.license_number)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a driver by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Driver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drivers WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Driver>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List drivers ordered by name. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Driver>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM drivers WHERE deleted_at IS NULL
             ORDER BY full_name ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT))
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// Update a driver. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDriver,
    ) -> Result<Option<Driver>, sqlx::Error> {
        let query = format!(
            "UPDATE drivers SET
                full_name = COALESCE($2, full_name),
                license_number = COALESCE($3, license_number),
                phone = COALESCE($4, phone)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.license_number)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a driver by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE drivers SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
