//! Driver entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `drivers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Driver {
    pub id: DbId,
    pub full_name: String,
    pub license_number: String,
    pub phone: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new driver.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDriver {
    pub full_name: String,
    pub license_number: String,
    pub phone: Option<String>,
}

/// DTO for updating a driver. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDriver {
    pub full_name: Option<String>,
    pub license_number: Option<String>,
    pub phone: Option<String>,
}
