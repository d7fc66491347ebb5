// models/src/appointments.rs
use std::fmt;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Lifecycle of a booking. The only legal transition is
/// Scheduled -> Completed, performed when a prescription is submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// One record per booking. References the patient by email/name and the
/// doctor by display name; there is no managed foreign key, so a renamed
/// user silently orphans its appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    /// Doctor display name, not a stable key. Ambiguous under name
    /// collisions; pending product clarification.
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub problem: String,
    /// Records written before the status field existed decode as Scheduled.
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<String>,
}

impl Appointment {
    pub fn is_scheduled(&self) -> bool {
        self.status == AppointmentStatus::Scheduled
    }
}
