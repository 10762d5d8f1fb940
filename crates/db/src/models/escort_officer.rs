//! Escort officer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `escort_officers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EscortOfficer {
    pub id: DbId,
    pub full_name: String,
    pub rank: Option<String>,
    pub unit: Option<String>,
    pub phone: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new escort officer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEscortOfficer {
    pub full_name: String,
    pub rank: Option<String>,
    pub unit: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating an escort officer. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEscortOfficer {
    pub full_name: Option<String>,
    pub rank: Option<String>,
    pub unit: Option<String>,
    pub phone: Option<String>,
}
