//! Repository for the `escort_officers` table.

use sqlx::PgPool;
use veranda_core::types::DbId;

use crate::models::escort_officer::{CreateEscortOfficer, EscortOfficer, UpdateEscortOfficer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, rank, unit, phone, deleted_at, created_at, updated_at";

/// Maximum page size for officer listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for officer listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD operations for escort officers.
pub struct EscortOfficerRepo;

impl EscortOfficerRepo {
    /// Insert a new escort officer, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEscortOfficer,
    ) -> Result<EscortOfficer, sqlx::Error> {
        let query = format!(
            "INSERT INTO escort_officers (full_name, rank, unit, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EscortOfficer>(&query)
            .bind(&input.full_name)
            .bind(&input.rank)
            .bind(&input.unit)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find an escort officer by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EscortOfficer>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM escort_officers WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, EscortOfficer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List escort officers ordered by name. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<EscortOfficer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM escort_officers WHERE deleted_at IS NULL
             ORDER BY full_name ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, EscortOfficer>(&query)
            .bind(limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT))
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// Update an escort officer. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEscortOfficer,
    ) -> Result<Option<EscortOfficer>, sqlx::Error> {
        let query = format!(
            "UPDATE escort_officers SET
                full_name = COALESCE($2, full_name),
                rank = COALESCE($3, rank),
                unit = COALESCE($4, unit),
                phone = COALESCE($5, phone)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EscortOfficer>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.rank)
            .bind(&input.unit)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an escort officer by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE escort_officers SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
