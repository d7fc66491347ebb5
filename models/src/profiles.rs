// models/src/profiles.rs
use serde::{Serialize, Deserialize};

/// Contact and medical baseline for a patient, keyed by the owning user's
/// email. Saved wholesale on each submission; omitted form fields arrive as
/// empty strings, there is no field-level merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientProfile {
    pub email: String,
    pub contact: String,
    pub address: String,
    pub height: String,
    pub weight: String,
    pub blood_group: String,
    pub allergies: String,
    pub conditions: String,
    pub history: String,
}

/// Practice details for a doctor, keyed by the owning user's email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub email: String,
    pub experience: String,
    pub clinic_address: String,
    pub contact: String,
    pub availability: String,
}

impl DoctorProfile {
    /// Availability string shown to booking patients when no profile or an
    /// empty availability has been saved.
    pub const AVAILABILITY_NOT_PROVIDED: &'static str = "Not provided";
}
