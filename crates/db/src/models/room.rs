//! Room entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub room_number: String,
    pub floor: i32,
    pub capacity: i32,
    pub notes: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new room.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub room_number: String,
    pub floor: i32,
    pub capacity: i32,
    pub notes: Option<String>,
}

/// DTO for updating a room. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoom {
    pub room_number: Option<String>,
    pub floor: Option<i32>,
    pub capacity: Option<i32>,
    pub notes: Option<String>,
}
