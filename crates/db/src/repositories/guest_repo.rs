//! Repository for the `guests` table.

use sqlx::{PgConnection, PgPool};
use veranda_core::types::DbId;

use crate::models::guest::{CreateGuest, Guest, UpdateGuest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, title, organization, country, phone, \
    dietary_notes, notes, deleted_at, created_at, updated_at";

/// Maximum page size for guest listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for guest listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD operations for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (full_name, title, organization, country, phone, dietary_notes, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(&input.full_name)
            .bind(&input.title)
            .bind(&input.organization)
            .bind(&input.country)
            .bind(&input.phone)
            .bind(&input.dietary_notes)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a guest by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a guest by ID and lock the row for the duration of the caller's
    /// transaction. Excludes soft-deleted rows.
    ///
    /// The engine locks the guest before touching visits or assignments so
    /// it serializes against a concurrent soft-delete.
    pub async fn find_by_id_locked(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guests WHERE id = $1 AND deleted_at IS NULL FOR UPDATE"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List guests ordered by name. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guests WHERE deleted_at IS NULL
             ORDER BY full_name ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT))
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// Update a guest. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGuest,
    ) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!(
            "UPDATE guests SET
                full_name = COALESCE($2, full_name),
                title = COALESCE($3, title),
                organization = COALESCE($4, organization),
                country = COALESCE($5, country),
                phone = COALESCE($6, phone),
                dietary_notes = COALESCE($7, dietary_notes),
                notes = COALESCE($8, notes)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.title)
            .bind(&input.organization)
            .bind(&input.country)
            .bind(&input.phone)
            .bind(&input.dietary_notes)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a guest by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE guests SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
