//! Route definitions for the `/guests` resource and its sub-resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{guest, presence, visit};
use crate::state::AppState;

/// Routes mounted at `/guests`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// POST   /{id}/presence      -> record presence event
/// GET    /{id}/visits        -> visit history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guest::list).post(guest::create))
        .route(
            "/{id}",
            get(guest::get_by_id)
                .put(guest::update)
                .delete(guest::delete),
        )
        .route("/{id}/presence", post(presence::record))
        .route("/{id}/visits", get(visit::list_by_guest))
}
