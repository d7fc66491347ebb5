// models/src/users.rs
use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::errors::ValidationError;

/// Account role, fixed at signup. Gates which views and actions are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            other => Err(ValidationError::InvalidRole(other.to_string())),
        }
    }
}

/// One record per account, keyed by email. The email is immutable once
/// created and the role never changes after signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    /// Bcrypt hash of the user's password. Never the plaintext.
    pub password_hash: String,
    pub role: Role,
    pub age: String,
    pub gender: String,
    /// Present for doctors only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_doctor(&self) -> bool {
        self.role == Role::Doctor
    }

    pub fn is_patient(&self) -> bool {
        self.role == Role::Patient
    }
}
