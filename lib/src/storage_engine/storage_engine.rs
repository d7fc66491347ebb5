// lib/src/storage_engine/storage_engine.rs

use std::fmt::Debug;
use async_trait::async_trait;
use models::errors::MedResult;

/// Table names used by the clinic stores. Each maps to one tree in the
/// backing engine.
pub mod trees {
    pub const USERS: &str = "users";
    pub const USERS_BY_ROLE: &str = "users_by_role";
    pub const PATIENT_DETAILS: &str = "patient_details";
    pub const DOCTOR_DETAILS: &str = "doctor_details";
    pub const APPOINTMENTS: &str = "appointments";
    pub const APPOINTMENTS_BY_PATIENT: &str = "appointments_by_patient";
    pub const APPOINTMENTS_BY_DOCTOR: &str = "appointments_by_doctor";
    pub const MEDICAL_HISTORY: &str = "medical_history";
    pub const MEDICAL_HISTORY_BY_PATIENT: &str = "medical_history_by_patient";
    pub const SESSIONS: &str = "sessions";
}

/// Key separator between an index prefix and the record key it points to.
/// NUL never appears in emails, doctor names, or uuid strings.
pub const INDEX_SEPARATOR: u8 = 0;

/// Build an index key `prefix\x00suffix`.
pub fn index_key(prefix: &str, suffix: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + 1 + suffix.len());
    key.extend_from_slice(prefix.as_bytes());
    key.push(INDEX_SEPARATOR);
    key.extend_from_slice(suffix.as_bytes());
    key
}

/// Prefix for scanning every index entry under `prefix`.
pub fn index_scan_prefix(prefix: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + 1);
    key.extend_from_slice(prefix.as_bytes());
    key.push(INDEX_SEPARATOR);
    key
}

/// Byte-level key-value engine over named trees. Exactly one implementation
/// is selected at startup; the in-memory and persistent engines are never
/// mixed at runtime.
#[async_trait]
pub trait StorageEngine: Send + Sync + Debug {
    async fn connect(&self) -> MedResult<()>;

    /// Unconditional put, last-write-wins.
    async fn insert(&self, tree: &str, key: &[u8], value: Vec<u8>) -> MedResult<()>;

    async fn retrieve(&self, tree: &str, key: &[u8]) -> MedResult<Option<Vec<u8>>>;

    async fn delete(&self, tree: &str, key: &[u8]) -> MedResult<()>;

    /// Ordered walk of every entry whose key starts with `prefix`.
    async fn scan_prefix(&self, tree: &str, prefix: &[u8]) -> MedResult<Vec<(Vec<u8>, Vec<u8>)>>;

    /// Conditional write: replaces the value at `key` with `new` only when
    /// the current value equals `expected` (None meaning absent). Returns
    /// whether the swap happened. `new = None` deletes conditionally.
    async fn compare_and_swap(
        &self,
        tree: &str,
        key: &[u8],
        expected: Option<Vec<u8>>,
        new: Option<Vec<u8>>,
    ) -> MedResult<bool>;

    async fn flush(&self) -> MedResult<()>;

    fn engine_type(&self) -> &'static str;
}
