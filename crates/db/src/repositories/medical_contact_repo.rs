//! Repository for the `medical_contacts` table.

use sqlx::PgPool;
use veranda_core::types::DbId;

use crate::models::medical_contact::{CreateMedicalContact, MedicalContact, UpdateMedicalContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, clinic, specialty, phone, deleted_at, created_at, updated_at";

/// Maximum page size for contact listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for contact listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD operations for medical contacts.
pub struct MedicalContactRepo;

impl MedicalContactRepo {
    /// Insert a new medical contact, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMedicalContact,
    ) -> Result<MedicalContact, sqlx::Error> {
        let query = format!(
            "INSERT INTO medical_contacts (full_name, clinic, specialty, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MedicalContact>(&query)
            .bind(&input.full_name)
            .bind(&input.clinic)
            .bind(&input.specialty)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a medical contact by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MedicalContact>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM medical_contacts WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, MedicalContact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List medical contacts ordered by name. Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<MedicalContact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM medical_contacts WHERE deleted_at IS NULL
             ORDER BY full_name ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, MedicalContact>(&query)
            .bind(limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT))
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// Update a medical contact. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedicalContact,
    ) -> Result<Option<MedicalContact>, sqlx::Error> {
        let query = format!(
            "UPDATE medical_contacts SET
                full_name = COALESCE($2, full_name),
                clinic = COALESCE($3, clinic),
                specialty = COALESCE($4, specialty),
                phone = COALESCE($5, phone)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MedicalContact>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.clinic)
            .bind(&input.specialty)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a medical contact by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE medical_contacts SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
