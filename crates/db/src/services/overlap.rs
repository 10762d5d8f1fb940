//! Overlap guard for exclusive assignments.
//!
//! Must run on a transaction connection: every active candidate row is
//! locked (`FOR UPDATE`, stable id order) before the interval comparison,
//! so two concurrent requests cannot both observe "no conflict" and both
//! commit overlapping assignments.

use sqlx::PgConnection;
use veranda_core::error::CoreError;
use veranda_core::interval::DateInterval;
use veranda_core::types::DbId;

use crate::models::assignment::{Assignment, ResourceKind};
use crate::repositories::AssignmentRepo;
use crate::tx::classify_db_error;

/// Checks a proposed interval against both exclusivity axes of a kind.
pub struct OverlapGuard;

impl OverlapGuard {
    /// Lock the active candidates for each axis the kind guards and verify
    /// the proposed interval intersects none of them.
    ///
    /// `exclude_id` removes the record being updated from its own check.
    /// On conflict, returns a `Conflict` naming the clashing record; the
    /// guard never silently picks a winner.
    pub async fn check_and_reserve(
        conn: &mut PgConnection,
        kind: ResourceKind,
        guest_id: DbId,
        resource_id: DbId,
        proposed: &DateInterval,
        exclude_id: Option<DbId>,
    ) -> Result<(), CoreError> {
        if kind.guards_subject() {
            let candidates =
                AssignmentRepo::lock_active_by_guest(conn, kind, guest_id, exclude_id)
                    .await
                    .map_err(classify_db_error)?;
            Self::verify_no_overlap(&candidates, proposed)?;
        }

        if kind.guards_resource() {
            let candidates =
                AssignmentRepo::lock_active_by_resource(conn, kind, resource_id, exclude_id)
                    .await
                    .map_err(classify_db_error)?;
            Self::verify_no_overlap(&candidates, proposed)?;
        }

        Ok(())
    }

    /// Compare the proposed interval against every locked candidate.
    fn verify_no_overlap(
        candidates: &[Assignment],
        proposed: &DateInterval,
    ) -> Result<(), CoreError> {
        for existing in candidates {
            // Stored rows satisfy the table CHECK, so construction only
            // fails if the database itself is inconsistent.
            let existing_interval = DateInterval::new(existing.from_date, existing.to_date)
                .map_err(|e| {
                    CoreError::Internal(format!(
                        "stored assignment {} has invalid interval: {e}",
                        existing.assignment_ref
                    ))
                })?;

            if proposed.overlaps(&existing_interval) {
                let until = existing
                    .to_date
                    .map_or_else(|| "open-ended".to_string(), |d| d.to_string());
                return Err(CoreError::Conflict(format!(
                    "overlaps active assignment {} ({} to {})",
                    existing.assignment_ref, existing.from_date, until
                )));
            }
        }
        Ok(())
    }
}
