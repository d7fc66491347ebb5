// lib/src/stores/history.rs

use std::sync::Arc;
use log::warn;
use models::errors::MedResult;
use models::history::MedicalHistoryRecord;

use crate::storage_engine::{index_key, index_scan_prefix, trees, StorageEngine};
use crate::stores::{decode, encode};

/// Append-only visit history, keyed by record id and indexed by patient
/// email. Records are never updated or deleted.
#[derive(Clone)]
pub struct MedicalHistoryStore {
    engine: Arc<dyn StorageEngine>,
}

impl MedicalHistoryStore {
    pub fn new(engine: Arc<dyn StorageEngine>) -> Self {
        MedicalHistoryStore { engine }
    }

    pub async fn append(&self, record: &MedicalHistoryRecord) -> MedResult<()> {
        let id = record.id.to_string();
        let bytes = encode(record)?;
        self.engine
            .insert(trees::MEDICAL_HISTORY, id.as_bytes(), bytes)
            .await?;
        self.engine
            .insert(
                trees::MEDICAL_HISTORY_BY_PATIENT,
                &index_key(&record.email, &id),
                id.into_bytes(),
            )
            .await?;
        Ok(())
    }

    pub async fn for_patient(&self, email: &str) -> MedResult<Vec<MedicalHistoryRecord>> {
        let entries = self
            .engine
            .scan_prefix(trees::MEDICAL_HISTORY_BY_PATIENT, &index_scan_prefix(email))
            .await?;
        let mut records = Vec::with_capacity(entries.len());
        for (_, id_bytes) in entries {
            let id = String::from_utf8_lossy(&id_bytes).into_owned();
            match self.engine.retrieve(trees::MEDICAL_HISTORY, id.as_bytes()).await? {
                Some(bytes) => records.push(decode(&bytes)?),
                None => warn!("history index points at missing record {}", id),
            }
        }
        Ok(records)
    }
}
