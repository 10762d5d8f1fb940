//! Assignment operations: create, update, release, reassign.
//!
//! Every operation is one transaction with a fixed lock order: master
//! rows first (guest, then resource), then assignment rows (the row
//! under mutation, then overlap candidates in stable id order).

use veranda_core::error::CoreError;
use veranda_core::interval::DateInterval;
use veranda_core::types::DbId;

use crate::models::assignment::{
    Assignment, CreateAssignment, Reassign, ResourceKind, UpdateAssignment,
};
use crate::repositories::{AssignmentRepo, SequenceRepo};
use crate::services::overlap::OverlapGuard;
use crate::tx::{begin_engine_tx, classify_db_error};
use crate::DbPool;

/// Orchestrates exclusive assignment mutations.
pub struct AssignmentService {
    pool: DbPool,
    lock_timeout_ms: u64,
}

impl AssignmentService {
    pub fn new(pool: DbPool, lock_timeout_ms: u64) -> Self {
        Self {
            pool,
            lock_timeout_ms,
        }
    }

    /// Create a new assignment.
    ///
    /// Fails `NotFound` when the guest or resource is missing or
    /// soft-deleted, `InvalidInterval` on a malformed range, `Conflict`
    /// when the interval overlaps an active assignment on a guarded axis.
    pub async fn create(&self, input: &CreateAssignment) -> Result<Assignment, CoreError> {
        let interval = DateInterval::new(input.from_date, input.to_date)?;
        let kind = input.resource_kind;

        let mut tx = begin_engine_tx(&self.pool, self.lock_timeout_ms).await?;

        Self::lock_parties(&mut tx, kind, input.guest_id, input.resource_id).await?;

        OverlapGuard::check_and_reserve(
            &mut tx,
            kind,
            input.guest_id,
            input.resource_id,
            &interval,
            None,
        )
        .await?;

        let assignment_ref = SequenceRepo::next_reference(&mut tx, kind.namespace())
            .await
            .map_err(classify_db_error)?;

        let assignment = AssignmentRepo::insert(
            &mut tx,
            &assignment_ref,
            kind,
            input.guest_id,
            input.resource_id,
            input.from_date,
            input.to_date,
            input.notes.as_deref(),
        )
        .await
        .map_err(classify_db_error)?;

        tx.commit().await.map_err(classify_db_error)?;

        tracing::info!(
            assignment_ref = %assignment.assignment_ref,
            kind = %assignment.resource_kind,
            guest_id = assignment.guest_id,
            resource_id = assignment.resource_id,
            "Assignment created"
        );
        Ok(assignment)
    }

    /// Update an assignment's interval bounds or notes.
    ///
    /// The overlap guard re-runs, excluding the record itself, only when
    /// the interval actually changed. Released assignments are immutable
    /// history and fail `InvalidTransition`.
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateAssignment,
    ) -> Result<Assignment, CoreError> {
        let mut tx = begin_engine_tx(&self.pool, self.lock_timeout_ms).await?;

        let existing = AssignmentRepo::find_by_id_locked(&mut tx, id)
            .await
            .map_err(classify_db_error)?
            .ok_or(CoreError::NotFound {
                entity: "Assignment",
                id,
            })?;

        if !existing.is_active {
            return Err(CoreError::InvalidTransition(format!(
                "assignment {} is released and cannot be updated",
                existing.assignment_ref
            )));
        }

        let from_date = input.from_date.unwrap_or(existing.from_date);
        let to_date = if input.clear_to_date.unwrap_or(false) {
            None
        } else {
            input.to_date.or(existing.to_date)
        };
        let interval = DateInterval::new(from_date, to_date)?;

        let interval_changed = from_date != existing.from_date || to_date != existing.to_date;
        if interval_changed {
            let kind = existing.kind()?;
            OverlapGuard::check_and_reserve(
                &mut tx,
                kind,
                existing.guest_id,
                existing.resource_id,
                &interval,
                Some(id),
            )
            .await?;
        }

        let updated =
            AssignmentRepo::update_fields(&mut tx, id, from_date, to_date, input.notes.as_deref())
                .await
                .map_err(classify_db_error)?;

        tx.commit().await.map_err(classify_db_error)?;
        Ok(updated)
    }

    /// Release an assignment: deactivate and stamp `released_at`.
    ///
    /// Never checked against overlap (releasing cannot conflict) and
    /// idempotent: releasing an already-inactive assignment returns it
    /// unchanged.
    pub async fn release(&self, id: DbId) -> Result<Assignment, CoreError> {
        let mut tx = begin_engine_tx(&self.pool, self.lock_timeout_ms).await?;

        let existing = AssignmentRepo::find_by_id_locked(&mut tx, id)
            .await
            .map_err(classify_db_error)?
            .ok_or(CoreError::NotFound {
                entity: "Assignment",
                id,
            })?;

        if !existing.is_active {
            tx.commit().await.map_err(classify_db_error)?;
            return Ok(existing);
        }

        let released = AssignmentRepo::release(&mut tx, id)
            .await
            .map_err(classify_db_error)?;

        tx.commit().await.map_err(classify_db_error)?;

        tracing::info!(
            assignment_ref = %released.assignment_ref,
            "Assignment released"
        );
        Ok(released)
    }

    /// Atomically release an assignment and create its replacement.
    ///
    /// Omitted subject/resource default to the old record's values. The
    /// release happens before the guard runs, so the replaced slot never
    /// conflicts with its successor; if anything fails, both halves roll
    /// back.
    pub async fn reassign(&self, old_id: DbId, input: &Reassign) -> Result<Assignment, CoreError> {
        // Unlocked peek to resolve the target parties before any lock is
        // taken. Subject, resource and kind are immutable columns; the
        // mutable state (is_active) is re-read under lock below.
        let peek = AssignmentRepo::find_by_id(&self.pool, old_id)
            .await
            .map_err(classify_db_error)?
            .ok_or(CoreError::NotFound {
                entity: "Assignment",
                id: old_id,
            })?;
        let kind = peek.kind()?;

        let guest_id = input.guest_id.unwrap_or(peek.guest_id);
        let resource_id = input.resource_id.unwrap_or(peek.resource_id);
        let interval = DateInterval::new(input.from_date, input.to_date)?;

        let mut tx = begin_engine_tx(&self.pool, self.lock_timeout_ms).await?;

        // Same lock order as `create`: master rows first, then assignment
        // rows.
        Self::lock_parties(&mut tx, kind, guest_id, resource_id).await?;

        let old = AssignmentRepo::find_by_id_locked(&mut tx, old_id)
            .await
            .map_err(classify_db_error)?
            .ok_or(CoreError::NotFound {
                entity: "Assignment",
                id: old_id,
            })?;

        if old.is_active {
            AssignmentRepo::release(&mut tx, old_id)
                .await
                .map_err(classify_db_error)?;
        }

        OverlapGuard::check_and_reserve(&mut tx, kind, guest_id, resource_id, &interval, None)
            .await?;

        let assignment_ref = SequenceRepo::next_reference(&mut tx, kind.namespace())
            .await
            .map_err(classify_db_error)?;

        let replacement = AssignmentRepo::insert(
            &mut tx,
            &assignment_ref,
            kind,
            guest_id,
            resource_id,
            input.from_date,
            input.to_date,
            input.notes.as_deref(),
        )
        .await
        .map_err(classify_db_error)?;

        tx.commit().await.map_err(classify_db_error)?;

        tracing::info!(
            old_ref = %old.assignment_ref,
            new_ref = %replacement.assignment_ref,
            "Assignment reassigned"
        );
        Ok(replacement)
    }

    /// Lock the guest row, then the resource's master row, failing
    /// `NotFound` for a missing or soft-deleted party.
    async fn lock_parties(
        tx: &mut sqlx::Transaction<'static, sqlx::Postgres>,
        kind: ResourceKind,
        guest_id: DbId,
        resource_id: DbId,
    ) -> Result<(), CoreError> {
        let guest_found = AssignmentRepo::lock_master_row(&mut *tx, "guests", guest_id)
            .await
            .map_err(classify_db_error)?;
        if !guest_found {
            return Err(CoreError::NotFound {
                entity: "Guest",
                id: guest_id,
            });
        }

        let resource_found =
            AssignmentRepo::lock_master_row(&mut *tx, kind.master_table(), resource_id)
                .await
                .map_err(classify_db_error)?;
        if !resource_found {
            return Err(CoreError::NotFound {
                entity: kind.master_entity(),
                id: resource_id,
            });
        }
        Ok(())
    }
}
