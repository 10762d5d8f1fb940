//! Exclusive assignment model, resource-kind catalogue, and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use veranda_core::error::CoreError;
use veranda_core::refs::SequenceNamespace;
use veranda_core::types::{DbId, Timestamp};

/// The kinds of resource a guest can hold an exclusive assignment on.
///
/// Each kind declares which exclusivity axes the overlap guard enforces:
/// the subject axis (one such resource per guest at a time) and/or the
/// resource axis (one guest per resource at a time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    EscortOfficer,
    MedicalContact,
    Vehicle,
    Room,
}

impl ResourceKind {
    /// Storage representation (TEXT column value).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::EscortOfficer => "escort_officer",
            ResourceKind::MedicalContact => "medical_contact",
            ResourceKind::Vehicle => "vehicle",
            ResourceKind::Room => "room",
        }
    }

    /// Parse the storage representation.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "escort_officer" => Ok(ResourceKind::EscortOfficer),
            "medical_contact" => Ok(ResourceKind::MedicalContact),
            "vehicle" => Ok(ResourceKind::Vehicle),
            "room" => Ok(ResourceKind::Room),
            other => Err(CoreError::Internal(format!(
                "unknown resource kind '{other}'"
            ))),
        }
    }

    /// Sequence namespace for this kind's assignment references.
    pub fn namespace(&self) -> SequenceNamespace {
        match self {
            ResourceKind::EscortOfficer => SequenceNamespace::OfficerAssignment,
            ResourceKind::MedicalContact => SequenceNamespace::MedicalAssignment,
            ResourceKind::Vehicle => SequenceNamespace::VehicleAssignment,
            ResourceKind::Room => SequenceNamespace::RoomAssignment,
        }
    }

    /// Master-data table holding this kind's resources.
    pub fn master_table(&self) -> &'static str {
        match self {
            ResourceKind::EscortOfficer => "escort_officers",
            ResourceKind::MedicalContact => "medical_contacts",
            ResourceKind::Vehicle => "vehicles",
            ResourceKind::Room => "rooms",
        }
    }

    /// Entity name used in `NotFound` errors for the resource side.
    pub fn master_entity(&self) -> &'static str {
        match self {
            ResourceKind::EscortOfficer => "EscortOfficer",
            ResourceKind::MedicalContact => "MedicalContact",
            ResourceKind::Vehicle => "Vehicle",
            ResourceKind::Room => "Room",
        }
    }

    /// Enforce "one such resource per guest at a time"?
    pub fn guards_subject(&self) -> bool {
        matches!(self, ResourceKind::EscortOfficer | ResourceKind::MedicalContact)
    }

    /// Enforce "one guest per resource at a time"?
    pub fn guards_resource(&self) -> bool {
        matches!(
            self,
            ResourceKind::EscortOfficer | ResourceKind::Vehicle | ResourceKind::Room
        )
    }
}

/// A row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub assignment_ref: String,
    pub resource_kind: String,
    pub guest_id: DbId,
    pub resource_id: DbId,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub is_active: bool,
    pub released_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Assignment {
    /// Typed view of the stored kind string.
    pub fn kind(&self) -> Result<ResourceKind, CoreError> {
        ResourceKind::parse(&self.resource_kind)
    }
}

/// DTO for creating a new assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub resource_kind: ResourceKind,
    pub guest_id: DbId,
    pub resource_id: DbId,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// DTO for updating an assignment's interval or notes.
///
/// `to_date: None` leaves the upper bound unchanged; set
/// `clear_to_date: true` to make the assignment open-ended.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAssignment {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub clear_to_date: Option<bool>,
    pub notes: Option<String>,
}

/// DTO for atomically replacing an assignment. Omitted subject/resource
/// default to the old record's values.
#[derive(Debug, Clone, Deserialize)]
pub struct Reassign {
    pub guest_id: Option<DbId>,
    pub resource_id: Option<DbId>,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Query parameters for `GET /api/v1/assignments`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentListQuery {
    pub resource_kind: Option<ResourceKind>,
    pub guest_id: Option<DbId>,
    pub resource_id: Option<DbId>,
    pub active: Option<bool>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}
