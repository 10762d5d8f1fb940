use std::sync::Arc;

use veranda_db::services::{AssignmentService, PresenceService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: veranda_db::DbPool,
    /// Presence recording engine (state machine + entry cascade).
    pub presence: Arc<PresenceService>,
    /// Exclusive assignment engine (overlap guard + sequence allocation).
    pub assignments: Arc<AssignmentService>,
}
