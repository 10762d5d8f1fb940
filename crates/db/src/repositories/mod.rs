//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods that must run inside an engine transaction take
//! `&mut PgConnection`; plain reads and standalone mutations take `&PgPool`.

pub mod assignment_repo;
pub mod driver_repo;
pub mod escort_officer_repo;
pub mod guest_repo;
pub mod guest_visit_repo;
pub mod meal_plan_repo;
pub mod medical_contact_repo;
pub mod room_repo;
pub mod sequence_repo;
pub mod staff_repo;
pub mod vehicle_repo;

pub use assignment_repo::AssignmentRepo;
pub use driver_repo::DriverRepo;
pub use escort_officer_repo::EscortOfficerRepo;
pub use guest_repo::GuestRepo;
pub use guest_visit_repo::GuestVisitRepo;
pub use meal_plan_repo::MealPlanRepo;
pub use medical_contact_repo::MedicalContactRepo;
pub use room_repo::RoomRepo;
pub use sequence_repo::SequenceRepo;
pub use staff_repo::StaffRepo;
pub use vehicle_repo::VehicleRepo;
