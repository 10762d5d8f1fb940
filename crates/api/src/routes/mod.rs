pub mod assignments;
pub mod drivers;
pub mod escort_officers;
pub mod guests;
pub mod health;
pub mod meal_plans;
pub mod medical_contacts;
pub mod rooms;
pub mod staff;
pub mod vehicles;
pub mod visits;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /guests                                  list, create
/// /guests/{id}                             get, update, delete
/// /guests/{id}/presence                    record presence event (POST)
/// /guests/{id}/visits                      visit history (GET)
///
/// /rooms, /drivers, /vehicles, /staff,
/// /escort-officers, /medical-contacts      standard master-data CRUD
///
/// /visits                                  list (filter by guest/active)
/// /visits/{id}                             get
///
/// /assignments                             list, create
/// /assignments/{id}                        get, update
/// /assignments/{id}/release                deactivate (POST)
/// /assignments/{id}/reassign               release + replace atomically (POST)
///
/// /meal-plans                              list, create
/// /meal-plans/{id}                         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/guests", guests::router())
        .nest("/rooms", rooms::router())
        .nest("/drivers", drivers::router())
        .nest("/vehicles", vehicles::router())
        .nest("/staff", staff::router())
        .nest("/escort-officers", escort_officers::router())
        .nest("/medical-contacts", medical_contacts::router())
        .nest("/visits", visits::router())
        .nest("/assignments", assignments::router())
        .nest("/meal-plans", meal_plans::router())
}
