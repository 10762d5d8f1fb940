//! Pure domain logic for the veranda guest-house operations ledger.
//!
//! This crate has zero I/O: presence status resolution, interval algebra,
//! reference formatting, and the shared error taxonomy all live here so the
//! persistence and API layers (and their tests) can use them without a
//! database.

pub mod error;
pub mod interval;
pub mod presence;
pub mod refs;
pub mod types;
