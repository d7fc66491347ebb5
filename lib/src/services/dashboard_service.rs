// lib/src/services/dashboard_service.rs

use log::warn;
use serde::Serialize;
use models::appointments::Appointment;
use models::errors::MedResult;
use models::history::MedicalHistoryRecord;
use models::profiles::PatientProfile;
use models::users::User;

use crate::stores::{AppointmentStore, MedicalHistoryStore, PatientProfileStore, UserStore};

/// Everything the patient dashboard shows. Built from three independent
/// reads; a failure in any one degrades that section to empty instead of
/// blanking the whole page.
#[derive(Debug, Clone, Serialize)]
pub struct PatientDashboard {
    pub appointments: Vec<Appointment>,
    pub profile: Option<PatientProfile>,
    pub history: Vec<MedicalHistoryRecord>,
}

/// One patient's record as seen by a doctor.
#[derive(Debug, Clone, Serialize)]
pub struct PatientRecordView {
    pub patient: Option<User>,
    pub profile: Option<PatientProfile>,
    pub history: Vec<MedicalHistoryRecord>,
}

pub struct DashboardService {
    users: UserStore,
    patient_profiles: PatientProfileStore,
    appointments: AppointmentStore,
    history: MedicalHistoryStore,
}

impl DashboardService {
    pub fn new(
        users: UserStore,
        patient_profiles: PatientProfileStore,
        appointments: AppointmentStore,
        history: MedicalHistoryStore,
    ) -> Self {
        DashboardService {
            users,
            patient_profiles,
            appointments,
            history,
        }
    }

    pub async fn patient_dashboard(&self, email: &str) -> MedResult<PatientDashboard> {
        let appointments = self
            .appointments
            .for_patient(email)
            .await
            .unwrap_or_else(|e| {
                warn!("appointment lookup for {} failed: {}", email, e);
                Vec::new()
            });
        let profile = self.patient_profiles.get(email).await.unwrap_or_else(|e| {
            warn!("profile lookup for {} failed: {}", email, e);
            None
        });
        let history = self.history.for_patient(email).await.unwrap_or_else(|e| {
            warn!("history lookup for {} failed: {}", email, e);
            Vec::new()
        });
        Ok(PatientDashboard {
            appointments,
            profile,
            history,
        })
    }

    /// No check that the requesting doctor has ever treated this patient;
    /// any authenticated doctor may view any patient. Known access-control
    /// gap, preserved as observed.
    pub async fn view_patient(&self, email: &str) -> MedResult<PatientRecordView> {
        let patient = self.users.get(email).await.unwrap_or_else(|e| {
            warn!("patient lookup for {} failed: {}", email, e);
            None
        });
        let profile = self.patient_profiles.get(email).await.unwrap_or_else(|e| {
            warn!("profile lookup for {} failed: {}", email, e);
            None
        });
        let history = self.history.for_patient(email).await.unwrap_or_else(|e| {
            warn!("history lookup for {} failed: {}", email, e);
            Vec::new()
        });
        Ok(PatientRecordView {
            patient,
            profile,
            history,
        })
    }
}
