// models/src/lib.rs

// Declare all top-level modules within the 'models' crate
pub mod appointments;
pub mod errors;
pub mod history;
pub mod profiles;
pub mod sessions;
pub mod users;

// Re-export common core types for convenience when other crates use 'models::*'
pub use appointments::{Appointment, AppointmentStatus};
pub use history::MedicalHistoryRecord;
pub use profiles::{DoctorProfile, PatientProfile};
pub use sessions::SessionRecord;
pub use users::{Role, User};
