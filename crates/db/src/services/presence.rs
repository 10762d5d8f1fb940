//! Presence recording: one transaction per recorded event.
//!
//! The evaluation date and wall-clock time are parameters all the way down;
//! this service never reads a clock, so repeated calls with identical
//! inputs and the same `today` resolve identically.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use veranda_core::error::CoreError;
use veranda_core::presence::{self, PresenceEvent, PresenceStatus};
use veranda_core::refs::SequenceNamespace;
use veranda_core::types::DbId;

use crate::models::guest_visit::{GuestVisit, RecordPresence};
use crate::repositories::{GuestRepo, GuestVisitRepo, SequenceRepo};
use crate::services::cascade::EntryCascade;
use crate::tx::{begin_engine_tx, classify_db_error};
use crate::DbPool;

/// Records presence events against the open visit of a guest.
pub struct PresenceService {
    pool: DbPool,
    cascade: Arc<dyn EntryCascade>,
    lock_timeout_ms: u64,
}

impl PresenceService {
    pub fn new(pool: DbPool, cascade: Arc<dyn EntryCascade>, lock_timeout_ms: u64) -> Self {
        Self {
            pool,
            cascade,
            lock_timeout_ms,
        }
    }

    /// Record a presence event for a guest.
    ///
    /// Creates a visit when the guest has no open one, otherwise updates
    /// the open visit (at most one exists per guest). When the event
    /// realizes an entry on `today` and the visit was not already
    /// `Entered`, the entry cascade fires inside the same transaction;
    /// a cascade failure aborts everything.
    pub async fn record(
        &self,
        guest_id: DbId,
        input: &RecordPresence,
        today: NaiveDate,
        now: NaiveTime,
    ) -> Result<GuestVisit, CoreError> {
        let mut tx = begin_engine_tx(&self.pool, self.lock_timeout_ms).await?;

        // Lock the guest row first: serializes against concurrent
        // soft-delete and orders all presence writes per guest.
        GuestRepo::find_by_id_locked(&mut tx, guest_id)
            .await
            .map_err(classify_db_error)?
            .ok_or(CoreError::NotFound {
                entity: "Guest",
                id: guest_id,
            })?;

        let existing = GuestVisitRepo::find_active_for_guest_locked(&mut tx, guest_id)
            .await
            .map_err(classify_db_error)?;

        presence::validate_entry_date_change(
            existing.as_ref().map(|v| v.entry_date),
            input.entry_date,
            today,
        )?;

        let event = PresenceEvent {
            entry_date: input.entry_date,
            entry_time: input.entry_time,
            exit_date: input.exit_date,
            exit_time: input.exit_time,
            cancelled: input.cancelled.unwrap_or(false),
        };
        let resolution = presence::resolve(&event, today, now);

        let prior_status = match &existing {
            Some(visit) => Some(visit.presence_status()?),
            None => None,
        };

        let visit = match existing {
            Some(open) => GuestVisitRepo::apply_resolution(&mut tx, open.id, input, &resolution)
                .await
                .map_err(classify_db_error)?,
            None => {
                let visit_ref =
                    SequenceRepo::next_reference(&mut tx, SequenceNamespace::GuestVisit)
                        .await
                        .map_err(classify_db_error)?;
                GuestVisitRepo::insert(&mut tx, guest_id, &visit_ref, input, &resolution)
                    .await
                    .map_err(classify_db_error)?
            }
        };

        // Fire the cascade once per realized entry: skip when the visit
        // was already Entered before this call.
        if resolution.entered_today && prior_status != Some(PresenceStatus::Entered) {
            self.cascade.on_guest_entered_today(&mut tx, &visit).await?;
        }

        tx.commit().await.map_err(classify_db_error)?;

        tracing::info!(
            guest_id,
            visit_ref = %visit.visit_ref,
            status = %visit.status,
            "Presence recorded"
        );
        Ok(visit)
    }
}
