// lib/src/services/appointment_service.rs

use std::sync::Arc;
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use models::appointments::{Appointment, AppointmentStatus};
use models::errors::{MedResult, MedTrackError};
use models::history::MedicalHistoryRecord;
use models::profiles::DoctorProfile;

use crate::notifier::Notifier;
use crate::stores::{AppointmentStore, DoctorProfileStore, MedicalHistoryStore, UserStore};

/// Booking form as submitted by a patient. The doctor is a display name
/// chosen from the bookable list; nothing validates that it still exists
/// by the time the form arrives.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentForm {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub problem: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrescriptionForm {
    /// Appointment id as rendered in the doctor's dashboard form.
    pub appt_id: String,
    pub prescription: String,
}

/// One entry in the booking page's doctor list: the user record's public
/// fields plus availability from the profile store.
#[derive(Debug, Clone, Serialize)]
pub struct BookableDoctor {
    pub name: String,
    pub email: String,
    pub specialization: Option<String>,
    pub availability: String,
}

pub struct AppointmentService {
    users: UserStore,
    doctor_profiles: DoctorProfileStore,
    appointments: AppointmentStore,
    history: MedicalHistoryStore,
    notifier: Arc<dyn Notifier>,
}

impl AppointmentService {
    pub fn new(
        users: UserStore,
        doctor_profiles: DoctorProfileStore,
        appointments: AppointmentStore,
        history: MedicalHistoryStore,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        AppointmentService {
            users,
            doctor_profiles,
            appointments,
            history,
            notifier,
        }
    }

    /// Every registered doctor with availability attached. A missing or
    /// unreadable profile degrades to the "Not provided" default rather
    /// than dropping the doctor from the list.
    pub async fn list_bookable_doctors(&self) -> MedResult<Vec<BookableDoctor>> {
        let doctors = self.users.list_doctors().await?;
        let mut bookable = Vec::with_capacity(doctors.len());
        for doctor in doctors {
            let availability = match self.doctor_profiles.get(&doctor.email).await {
                Ok(Some(profile)) if !profile.availability.is_empty() => profile.availability,
                _ => DoctorProfile::AVAILABILITY_NOT_PROVIDED.to_string(),
            };
            bookable.push(BookableDoctor {
                name: doctor.name,
                email: doctor.email,
                specialization: doctor.specialization,
                availability,
            });
        }
        Ok(bookable)
    }

    /// Persist a new Scheduled appointment under a fresh id and announce
    /// it. There is no slot-conflict check and no doctor-existence check.
    pub async fn submit_appointment(&self, form: AppointmentForm) -> MedResult<Appointment> {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_name: form.patient_name,
            email: form.email,
            phone: form.phone,
            doctor: form.doctor,
            date: form.date,
            time: form.time,
            problem: form.problem,
            status: AppointmentStatus::Scheduled,
            prescription: None,
        };
        self.appointments.put(&appointment).await?;
        info!(
            "appointment {} booked for {} with {}",
            appointment.id, appointment.email, appointment.doctor
        );

        self.notifier
            .publish(
                "New Appointment Booked",
                &format!(
                    "New appointment booked for {} with Dr.{} on {} at {}",
                    appointment.patient_name, appointment.doctor, appointment.date, appointment.time
                ),
            )
            .await;
        Ok(appointment)
    }

    /// The schedule for one doctor, matched by display name.
    pub async fn doctor_appointments(&self, doctor_name: &str) -> MedResult<Vec<Appointment>> {
        self.appointments.for_doctor(doctor_name).await
    }

    /// Complete an appointment and append its history record. An empty id
    /// or prescription is a no-op (`Ok(None)`); an id that parses but does
    /// not exist is NotFound; a repeated or concurrent completion is a
    /// Conflict and writes no second history record.
    pub async fn submit_prescription(
        &self,
        form: PrescriptionForm,
    ) -> MedResult<Option<Appointment>> {
        if form.appt_id.is_empty() || form.prescription.is_empty() {
            return Ok(None);
        }
        let id = Uuid::parse_str(&form.appt_id)
            .map_err(|_| MedTrackError::NotFound(format!("appointment {}", form.appt_id)))?;

        let completed = self.appointments.complete(id, &form.prescription).await?;
        let record = MedicalHistoryRecord::from_completed(&completed, &form.prescription);
        self.history.append(&record).await?;
        info!(
            "prescription recorded for appointment {} (history {})",
            completed.id, record.id
        );
        Ok(Some(completed))
    }
}
