use std::io;
pub use thiserror::Error;
use uuid::Error as UuidError;
use serde_json::Error as SerdeJsonError;
use serde::{Serialize, Deserialize};

use crate::users::Role;

/// The error taxonomy for the clinic application.
///
/// Store-layer failures are caught at the adapter boundary and either
/// degraded to empty data (reads) or surfaced to the caller (writes).
#[derive(Debug, Serialize, Deserialize, Error, Clone)]
pub enum MedTrackError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error("deserialization error: {0}")]
    DeserializationError(String),
    #[error("configuration error: {0}")]
    ConfigurationError(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("conflicting write: {0}")]
    Conflict(String),
    #[error("invalid credentials")]
    Auth,
    #[error("{0} access required")]
    Forbidden(Role),
    #[error("validation error: {0}")]
    Validation(ValidationError),
    #[cfg(feature = "sled-errors")]
    #[error("sled error: {0}")]
    Sled(String),
    #[error("UUID parsing or generation error: {0}")]
    Uuid(String),
    #[error("an internal error occurred: {0}")]
    InternalError(String),
}

impl From<&str> for MedTrackError {
    fn from(error: &str) -> Self {
        MedTrackError::InternalError(error.to_string())
    }
}

impl From<io::Error> for MedTrackError {
    fn from(err: io::Error) -> Self {
        MedTrackError::Io(format!("IO error: {}", err))
    }
}

impl From<SerdeJsonError> for MedTrackError {
    fn from(err: SerdeJsonError) -> Self {
        MedTrackError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<UuidError> for MedTrackError {
    fn from(err: UuidError) -> Self {
        MedTrackError::Uuid(format!("UUID error: {}", err))
    }
}

impl From<ValidationError> for MedTrackError {
    fn from(err: ValidationError) -> Self {
        MedTrackError::Validation(err)
    }
}

#[cfg(feature = "sled-errors")]
impl From<sled::Error> for MedTrackError {
    fn from(err: sled::Error) -> Self {
        MedTrackError::Sled(format!("Sled error: {}", err))
    }
}

#[derive(Debug, Serialize, Deserialize, Error, PartialEq, Clone)]
pub enum ValidationError {
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("an account with email {0} already exists")]
    EmailAlreadyRegistered(String),
    #[error("required field {0} is missing or empty")]
    MissingField(String),
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("password hashing failed")]
    PasswordHashingFailed,
    #[error("password verification failed")]
    PasswordVerificationFailed,
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),
}

/// A type alias for a `Result` that returns a `MedTrackError` on failure.
pub type MedResult<T> = Result<T, MedTrackError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
