//! Guest visit (presence record) model and DTOs.
//!
//! The `status` column is TEXT at the storage boundary; use
//! [`GuestVisit::status`] to get the typed [`PresenceStatus`].

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::error::CoreError;
use veranda_core::presence::PresenceStatus;
use veranda_core::types::{DbId, Timestamp};

/// A row from the `guest_visits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GuestVisit {
    pub id: DbId,
    pub visit_ref: String,
    pub guest_id: DbId,
    pub entry_date: NaiveDate,
    pub entry_time: NaiveTime,
    pub exit_date: Option<NaiveDate>,
    pub exit_time: Option<NaiveTime>,
    pub status: String,
    pub is_active: bool,
    pub recorded_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl GuestVisit {
    /// Typed view of the stored status string.
    pub fn presence_status(&self) -> Result<PresenceStatus, CoreError> {
        PresenceStatus::parse(&self.status)
    }
}

/// DTO for recording (creating or updating) a guest's presence.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPresence {
    pub entry_date: NaiveDate,
    pub entry_time: NaiveTime,
    pub exit_date: Option<NaiveDate>,
    pub exit_time: Option<NaiveTime>,
    pub cancelled: Option<bool>,
    pub recorded_by: Option<String>,
}

/// Query parameters for `GET /api/v1/visits`.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitListQuery {
    pub guest_id: Option<DbId>,
    pub active: Option<bool>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}
