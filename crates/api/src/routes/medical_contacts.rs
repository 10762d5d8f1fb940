//! Route definitions for the `/medical-contacts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::medical_contact;
use crate::state::AppState;

/// Routes mounted at `/medical-contacts`.
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
        .route("/", get(medical_contact::list).post(medical_contact::create))
        .route(
            "/{id}",
            get(medical_contact::get_by_id)
                .put(medical_contact::update)
                .delete(medical_contact::delete),
        )
}
