//! Repository for the `rooms` table.

use sqlx::PgPool;
use veranda_core::types::DbId;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_number, floor, capacity, notes, deleted_at, created_at, updated_at";

/// Maximum page size for room listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for room listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (room_number, floor, capacity, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.room_number)
            .bind(input.floor)
            .bind(input.capacity)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a room by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List rooms ordered by room number. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooms WHERE deleted_at IS NULL
             ORDER BY room_number ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT))
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// Update a room. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                room_number = COALESCE($2, room_number),
                floor = COALESCE($3, floor),
                capacity = COALESCE($4, capacity),
                notes = COALESCE($5, notes)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.room_number)
            .bind(input.floor)
            .bind(input.capacity)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a room by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE rooms SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
