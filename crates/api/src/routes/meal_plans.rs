//! Route definitions for the `/meal-plans` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::meal_plan;
use crate::state::AppState;

/// Routes mounted at `/meal-plans`.
///
/// ```text
/// GET    /        -> list (filter: date, guest_id)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meal_plan::list).post(meal_plan::create))
        .route(
            "/{id}",
            get(meal_plan::get_by_id)
                .put(meal_plan::update)
                .delete(meal_plan::delete),
        )
}
