// models/src/history.rs
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::appointments::Appointment;

/// Immutable record of a completed visit. Appended exactly once, when an
/// appointment transitions Scheduled -> Completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalHistoryRecord {
    /// Unique record ID, distinct from the appointment ID.
    pub id: Uuid,
    /// Patient email the record belongs to.
    pub email: String,
    /// Visit date, carried over from the appointment.
    pub date: String,
    /// Doctor display name, carried over from the appointment.
    pub doctor: String,
    /// The appointment's stated problem becomes the recorded diagnosis.
    pub diagnosis: String,
    pub prescription: String,
}

impl MedicalHistoryRecord {
    /// Derive the history record for a completed appointment.
    pub fn from_completed(appointment: &Appointment, prescription: &str) -> Self {
        MedicalHistoryRecord {
            id: Uuid::new_v4(),
            email: appointment.email.clone(),
            date: appointment.date.clone(),
            doctor: appointment.doctor.clone(),
            diagnosis: appointment.problem.clone(),
            prescription: prescription.to_string(),
        }
    }
}
