//! Route definitions for the `/assignments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assignment;
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// GET  /                  -> list (filter: resource_kind, guest_id, resource_id, active)
/// POST /                  -> create
/// GET  /{id}              -> get_by_id
/// PUT  /{id}              -> update interval/notes
/// POST /{id}/release      -> deactivate
/// POST /{id}/reassign     -> release + create replacement atomically
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assignment::list).post(assignment::create))
        .route(
            "/{id}",
            get(assignment::get_by_id).put(assignment::update),
        )
        .route("/{id}/release", post(assignment::release))
        .route("/{id}/reassign", post(assignment::reassign))
}
