//! Vehicle entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub plate_number: String,
    pub make_model: Option<String>,
    pub seats: i32,
    pub driver_id: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicle {
    pub plate_number: String,
    pub make_model: Option<String>,
    pub seats: i32,
    pub driver_id: Option<DbId>,
}

/// DTO for updating a vehicle. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVehicle {
    pub plate_number: Option<String>,
    pub make_model: Option<String>,
    pub seats: Option<i32>,
    pub driver_id: Option<DbId>,
}
