//! Route definitions for the `/drivers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::driver;
use crate::state::AppState;

/// Routes mounted at `/drivers`.
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
        .route("/", get(driver::list).post(driver::create))
        .route(
            "/{id}",
            get(driver::get_by_id)
                .put(driver::update)
                .delete(driver::delete),
        )
}
