//! Medical contact entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `medical_contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MedicalContact {
    pub id: DbId,
    pub full_name: String,
    pub clinic: Option<String>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new medical contact.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedicalContact {
    pub full_name: String,
    pub clinic: Option<String>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating a medical contact. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMedicalContact {
    pub full_name: Option<String>,
    pub clinic: Option<String>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
}
