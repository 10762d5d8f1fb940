//! Route definitions for the read-only `/visits` resource.
//!
//! Visits are written exclusively through `/guests/{id}/presence`.

use axum::routing::get;
use axum::Router;

use crate::handlers::visit;
use crate::state::AppState;

/// Routes mounted at `/visits`.
///
/// ```text
/// GET /        -> list (filter: guest_id, active)
/// GET /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(visit::list))
        .route("/{id}", get(visit::get_by_id))
}
