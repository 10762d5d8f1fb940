//! Presence recording endpoint.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use veranda_core::types::DbId;
use veranda_db::models::guest_visit::{GuestVisit, RecordPresence};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/guests/{id}/presence
///
/// The only place the presence engine touches a wall clock: `today` and
/// `now` are materialized here once and passed down, so everything below
/// this point is deterministic.
pub async fn record(
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
    Json(input): Json<RecordPresence>,
) -> AppResult<Json<GuestVisit>> {
    let now_utc = Utc::now();
    let visit = state
        .presence
        .record(guest_id, &input, now_utc.date_naive(), now_utc.time())
        .await?;
    Ok(Json(visit))
}
