//! Route definitions for the `/escort-officers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::escort_officer;
use crate::state::AppState;

/// Routes mounted at `/escort-officers`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(escort_officer::list).post(escort_officer::create))
        .route(
            "/{id}",
            get(escort_officer::get_by_id)
                .put(escort_officer::update)
                .delete(escort_officer::delete),
        )
}
