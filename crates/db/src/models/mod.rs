//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod assignment;
pub mod driver;
pub mod escort_officer;
pub mod guest;
pub mod guest_visit;
pub mod meal_plan;
pub mod medical_contact;
pub mod room;
pub mod staff;
pub mod vehicle;
