//! Request handlers, one module per resource.

pub mod assignment;
pub mod driver;
pub mod escort_officer;
pub mod guest;
pub mod meal_plan;
pub mod medical_contact;
pub mod presence;
pub mod room;
pub mod staff;
pub mod vehicle;
pub mod visit;
