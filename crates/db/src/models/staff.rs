//! Staff entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `staff` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub full_name: String,
    pub role_title: Option<String>,
    pub phone: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new staff member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaff {
    pub full_name: String,
    pub role_title: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating a staff member. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStaff {
    pub full_name: Option<String>,
    pub role_title: Option<String>,
    pub phone: Option<String>,
}
