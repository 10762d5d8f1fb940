//! Repository for the `vehicles` table.

use sqlx::PgPool;
use veranda_core::types::DbId;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, plate_number, make_model, seats, driver_id, deleted_at, created_at, updated_at";

/// Maximum page size for vehicle listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for vehicle listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (plate_number, make_model, seats, driver_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.plate_number)
            .bind(&input.make_model)
            .bind(input.seats)
            .bind(input.driver_id)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List vehicles ordered by plate number. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles WHERE deleted_at IS NULL
             ORDER BY plate_number ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT))
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// Update a vehicle. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                plate_number = COALESCE($2, plate_number),
                make_model = COALESCE($3, make_model),
                seats = COALESCE($4, seats),
                driver_id = COALESCE($5, driver_id)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.plate_number)
            .bind(&input.make_model)
            .bind(input.seats)
            .bind(input.driver_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a vehicle by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE vehicles SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
