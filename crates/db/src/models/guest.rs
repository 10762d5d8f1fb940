//! Guest entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `guests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guest {
    pub id: DbId,
    pub full_name: String,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub dietary_notes: Option<String>,
    pub notes: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new guest.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuest {
    pub full_name: String,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub dietary_notes: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating a guest. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGuest {
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub dietary_notes: Option<String>,
    pub notes: Option<String>,
}
