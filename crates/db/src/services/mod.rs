//! Transactional services enforcing the engine's invariants.
//!
//! Each operation is one transaction: lock master rows first (guest, then
//! resource), then candidate assignment rows in stable id order, then
//! decide and write. Contention surfaces as `Busy` via the lock timeout
//! set in [`crate::tx::begin_engine_tx`].

pub mod assignment;
pub mod cascade;
pub mod overlap;
pub mod presence;

pub use assignment::AssignmentService;
pub use cascade::{EntryCascade, MealPlanCascade};
pub use overlap::OverlapGuard;
pub use presence::PresenceService;
