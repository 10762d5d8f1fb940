//! Entry cascade: the same-transaction side effect of a realized entry.
//!
//! The presence service only knows the [`EntryCascade`] trait; the concrete
//! meal-plan propagation is injected at startup so presence tracking never
//! imports meal-domain code. The trait takes the caller's open transaction
//! connection, so the side effect commits or aborts with the presence write.

use async_trait::async_trait;
use sqlx::PgConnection;
use veranda_core::error::CoreError;

use crate::models::guest_visit::GuestVisit;
use crate::repositories::MealPlanRepo;
use crate::tx::classify_db_error;

/// Capability invoked exactly once when a create/update realizes a guest's
/// entry on the evaluation date.
#[async_trait]
pub trait EntryCascade: Send + Sync {
    async fn on_guest_entered_today(
        &self,
        conn: &mut PgConnection,
        visit: &GuestVisit,
    ) -> Result<(), CoreError>;
}

/// Production cascade: propagate the day's meal plan for the entering guest.
///
/// Upserts with `ON CONFLICT DO NOTHING`, so an existing row for the guest
/// and date (manual or from an earlier cascade) is left untouched.
pub struct MealPlanCascade;

#[async_trait]
impl EntryCascade for MealPlanCascade {
    async fn on_guest_entered_today(
        &self,
        conn: &mut PgConnection,
        visit: &GuestVisit,
    ) -> Result<(), CoreError> {
        // The guest row is already locked by the presence service.
        let dietary_notes: Option<String> =
            sqlx::query_scalar("SELECT dietary_notes FROM guests WHERE id = $1")
                .bind(visit.guest_id)
                .fetch_one(&mut *conn)
                .await
                .map_err(classify_db_error)?;

        let inserted = MealPlanRepo::upsert_for_entry(
            conn,
            visit.guest_id,
            visit.entry_date,
            dietary_notes.as_deref(),
            visit.id,
        )
        .await
        .map_err(classify_db_error)?;

        match inserted {
            Some(plan) => {
                tracing::info!(
                    guest_id = visit.guest_id,
                    plan_date = %plan.plan_date,
                    visit_ref = %visit.visit_ref,
                    "Meal plan propagated for realized entry"
                );
            }
            None => {
                tracing::debug!(
                    guest_id = visit.guest_id,
                    plan_date = %visit.entry_date,
                    "Meal plan already present; cascade left it untouched"
                );
            }
        }
        Ok(())
    }
}
