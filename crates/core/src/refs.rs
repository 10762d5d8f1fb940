//! Human-readable reference formatting for sequence-allocated records.
//!
//! Allocation itself (monotonic, gap-tolerant counters) lives in the db
//! layer; this module only owns the namespace catalogue and the pure
//! formatting of an allocated number into a reference like `GV-000042`.

use serde::{Deserialize, Serialize};

/// Zero-pad width for the numeric part of a reference.
const REF_PAD_WIDTH: usize = 6;

/// One namespace per record type that receives sequence-generated references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceNamespace {
    GuestVisit,
    OfficerAssignment,
    MedicalAssignment,
    VehicleAssignment,
    RoomAssignment,
}

impl SequenceNamespace {
    /// Name of the backing PostgreSQL sequence.
    pub fn sequence_name(&self) -> &'static str {
        match self {
            SequenceNamespace::GuestVisit => "guest_visit_seq",
            SequenceNamespace::OfficerAssignment => "officer_assignment_seq",
            SequenceNamespace::MedicalAssignment => "medical_assignment_seq",
            SequenceNamespace::VehicleAssignment => "vehicle_assignment_seq",
            SequenceNamespace::RoomAssignment => "room_assignment_seq",
        }
    }

    /// Reference prefix for records drawn from this namespace.
    pub fn prefix(&self) -> &'static str {
        match self {
            SequenceNamespace::GuestVisit => "GV",
            SequenceNamespace::OfficerAssignment => "OA",
            SequenceNamespace::MedicalAssignment => "MA",
            SequenceNamespace::VehicleAssignment => "VA",
            SequenceNamespace::RoomAssignment => "RA",
        }
    }
}

/// Format an allocated number into a reference: prefix, dash, zero-padded
/// number. Numbers wider than the pad width keep all their digits.
pub fn format_reference(namespace: SequenceNamespace, number: i64) -> String {
    format!(
        "{}-{:0width$}",
        namespace.prefix(),
        number,
        width = REF_PAD_WIDTH
    )
}
