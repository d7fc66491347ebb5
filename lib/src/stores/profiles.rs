// lib/src/stores/profiles.rs

use std::sync::Arc;
use models::errors::MedResult;
use models::profiles::{DoctorProfile, PatientProfile};

use crate::storage_engine::{trees, StorageEngine};
use crate::stores::{decode, encode};

/// Patient profile records, keyed by the owning user's email. Saves are
/// wholesale overwrites; there is no field-level merge.
#[derive(Clone)]
pub struct PatientProfileStore {
    engine: Arc<dyn StorageEngine>,
}

impl PatientProfileStore {
    pub fn new(engine: Arc<dyn StorageEngine>) -> Self {
        PatientProfileStore { engine }
    }

    pub async fn save(&self, profile: &PatientProfile) -> MedResult<()> {
        let record = encode(profile)?;
        self.engine
            .insert(trees::PATIENT_DETAILS, profile.email.as_bytes(), record)
            .await
    }

    pub async fn get(&self, email: &str) -> MedResult<Option<PatientProfile>> {
        match self.engine.retrieve(trees::PATIENT_DETAILS, email.as_bytes()).await? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

/// Doctor profile records, same keying and overwrite semantics.
#[derive(Clone)]
pub struct DoctorProfileStore {
    engine: Arc<dyn StorageEngine>,
}

impl DoctorProfileStore {
    pub fn new(engine: Arc<dyn StorageEngine>) -> Self {
        DoctorProfileStore { engine }
    }

    pub async fn save(&self, profile: &DoctorProfile) -> MedResult<()> {
        let record = encode(profile)?;
        self.engine
            .insert(trees::DOCTOR_DETAILS, profile.email.as_bytes(), record)
            .await
    }

    pub async fn get(&self, email: &str) -> MedResult<Option<DoctorProfile>> {
        match self.engine.retrieve(trees::DOCTOR_DETAILS, email.as_bytes()).await? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_engine::InMemoryStorage;

    #[tokio::test]
    async fn save_overwrites_wholesale() {
        let store = PatientProfileStore::new(Arc::new(InMemoryStorage::new()));
        let mut profile = PatientProfile {
            email: "ann@x.com".to_string(),
            contact: "555".to_string(),
            allergies: "pollen".to_string(),
            ..Default::default()
        };
        store.save(&profile).await.unwrap();

        // Re-save with allergies omitted (empty): the old value must not survive.
        profile.allergies = String::new();
        profile.contact = "556".to_string();
        store.save(&profile).await.unwrap();

        let loaded = store.get("ann@x.com").await.unwrap().unwrap();
        assert_eq!(loaded.contact, "556");
        assert_eq!(loaded.allergies, "");
    }

    #[tokio::test]
    async fn absent_profile_is_none_not_error() {
        let store = DoctorProfileStore::new(Arc::new(InMemoryStorage::new()));
        assert!(store.get("nobody@x.com").await.unwrap().is_none());
    }
}
