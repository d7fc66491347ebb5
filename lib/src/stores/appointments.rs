// lib/src/stores/appointments.rs

use std::sync::Arc;
use log::warn;
use uuid::Uuid;
use models::appointments::{Appointment, AppointmentStatus};
use models::errors::{MedResult, MedTrackError};

use crate::storage_engine::{index_key, index_scan_prefix, trees, StorageEngine};
use crate::stores::{decode, encode};

/// Appointment records keyed by id, with index trees for the two queries
/// the application actually runs: by patient email and by doctor display
/// name.
#[derive(Clone)]
pub struct AppointmentStore {
    engine: Arc<dyn StorageEngine>,
}

impl AppointmentStore {
    pub fn new(engine: Arc<dyn StorageEngine>) -> Self {
        AppointmentStore { engine }
    }

    pub async fn put(&self, appointment: &Appointment) -> MedResult<()> {
        let id = appointment.id.to_string();
        let record = encode(appointment)?;
        self.engine
            .insert(trees::APPOINTMENTS, id.as_bytes(), record)
            .await?;
        self.engine
            .insert(
                trees::APPOINTMENTS_BY_PATIENT,
                &index_key(&appointment.email, &id),
                id.clone().into_bytes(),
            )
            .await?;
        self.engine
            .insert(
                trees::APPOINTMENTS_BY_DOCTOR,
                &index_key(&appointment.doctor, &id),
                id.into_bytes(),
            )
            .await?;
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> MedResult<Option<Appointment>> {
        let key = id.to_string();
        match self.engine.retrieve(trees::APPOINTMENTS, key.as_bytes()).await? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub async fn for_patient(&self, email: &str) -> MedResult<Vec<Appointment>> {
        self.collect_index(trees::APPOINTMENTS_BY_PATIENT, email).await
    }

    pub async fn for_doctor(&self, doctor_name: &str) -> MedResult<Vec<Appointment>> {
        self.collect_index(trees::APPOINTMENTS_BY_DOCTOR, doctor_name).await
    }

    /// Atomically transition Scheduled -> Completed and attach the
    /// prescription. The swap is conditioned on the exact stored record, so
    /// a concurrent completion (or a repeat of the same one) loses and maps
    /// to `Conflict` instead of clobbering the first write.
    pub async fn complete(&self, id: Uuid, prescription: &str) -> MedResult<Appointment> {
        let key = id.to_string();
        let current_bytes = self
            .engine
            .retrieve(trees::APPOINTMENTS, key.as_bytes())
            .await?
            .ok_or_else(|| MedTrackError::NotFound(format!("appointment {}", id)))?;
        let current: Appointment = decode(&current_bytes)?;
        if current.status == AppointmentStatus::Completed {
            return Err(MedTrackError::Conflict(format!(
                "appointment {} is already completed",
                id
            )));
        }

        let mut updated = current.clone();
        updated.status = AppointmentStatus::Completed;
        updated.prescription = Some(prescription.to_string());
        let updated_bytes = encode(&updated)?;

        let swapped = self
            .engine
            .compare_and_swap(
                trees::APPOINTMENTS,
                key.as_bytes(),
                Some(current_bytes),
                Some(updated_bytes),
            )
            .await?;
        if !swapped {
            return Err(MedTrackError::Conflict(format!(
                "appointment {} changed concurrently",
                id
            )));
        }
        Ok(updated)
    }

    async fn collect_index(&self, index_tree: &str, prefix: &str) -> MedResult<Vec<Appointment>> {
        let entries = self
            .engine
            .scan_prefix(index_tree, &index_scan_prefix(prefix))
            .await?;
        let mut appointments = Vec::with_capacity(entries.len());
        for (_, id_bytes) in entries {
            let id = String::from_utf8_lossy(&id_bytes).into_owned();
            match self.engine.retrieve(trees::APPOINTMENTS, id.as_bytes()).await? {
                Some(bytes) => appointments.push(decode(&bytes)?),
                None => warn!("appointment index points at missing record {}", id),
            }
        }
        Ok(appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_engine::InMemoryStorage;

    fn appointment(email: &str, doctor: &str) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            patient_name: "Ann".to_string(),
            email: email.to_string(),
            phone: "555".to_string(),
            doctor: doctor.to_string(),
            date: "2026-09-01".to_string(),
            time: "10:00".to_string(),
            problem: "headache".to_string(),
            status: AppointmentStatus::Scheduled,
            prescription: None,
        }
    }

    #[tokio::test]
    async fn indexes_answer_both_queries() {
        let store = AppointmentStore::new(Arc::new(InMemoryStorage::new()));
        store.put(&appointment("ann@x.com", "Dr. Grey")).await.unwrap();
        store.put(&appointment("ann@x.com", "Dr. House")).await.unwrap();
        store.put(&appointment("bob@x.com", "Dr. Grey")).await.unwrap();

        assert_eq!(store.for_patient("ann@x.com").await.unwrap().len(), 2);
        assert_eq!(store.for_patient("bob@x.com").await.unwrap().len(), 1);
        assert_eq!(store.for_doctor("Dr. Grey").await.unwrap().len(), 2);
        assert_eq!(store.for_doctor("Dr. Nobody").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn complete_transitions_once_and_only_once() {
        let store = AppointmentStore::new(Arc::new(InMemoryStorage::new()));
        let appt = appointment("ann@x.com", "Dr. Grey");
        store.put(&appt).await.unwrap();

        let done = store.complete(appt.id, "rest and fluids").await.unwrap();
        assert_eq!(done.status, AppointmentStatus::Completed);
        assert_eq!(done.prescription.as_deref(), Some("rest and fluids"));

        let err = store.complete(appt.id, "second opinion").await.unwrap_err();
        assert!(matches!(err, MedTrackError::Conflict(_)));

        // The first prescription must have survived.
        let stored = store.get(appt.id).await.unwrap().unwrap();
        assert_eq!(stored.prescription.as_deref(), Some("rest and fluids"));
    }

    #[tokio::test]
    async fn complete_missing_appointment_is_not_found() {
        let store = AppointmentStore::new(Arc::new(InMemoryStorage::new()));
        let err = store.complete(Uuid::new_v4(), "anything").await.unwrap_err();
        assert!(matches!(err, MedTrackError::NotFound(_)));
    }
}
