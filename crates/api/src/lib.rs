//! HTTP layer for the veranda ledger.
//!
//! Exposed as a library so integration tests can build the exact router
//! (middleware stack included) that the binary serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
