// lib/src/stores/mod.rs
//
// Typed adapters over the raw storage engine. Each adapter owns the JSON
// encoding of its records and the upkeep of its secondary-index trees, so
// callers never see bytes or tree names.

pub mod appointments;
pub mod history;
pub mod profiles;
pub mod users;

use serde::de::DeserializeOwned;
use serde::Serialize;
use models::errors::{MedResult, MedTrackError};

pub use appointments::AppointmentStore;
pub use history::MedicalHistoryStore;
pub use profiles::{DoctorProfileStore, PatientProfileStore};
pub use users::UserStore;

pub(crate) fn encode<T: Serialize>(value: &T) -> MedResult<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|e| MedTrackError::SerializationError(e.to_string()))
}

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> MedResult<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| MedTrackError::DeserializationError(e.to_string()))
}
