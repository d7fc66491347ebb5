// lib/src/stores/users.rs

use std::sync::Arc;
use log::warn;
use models::errors::{MedResult, ValidationError};
use models::users::{Role, User};

use crate::storage_engine::{index_key, index_scan_prefix, trees, StorageEngine};
use crate::stores::{decode, encode};

/// One record per account, keyed by email, plus a role index so doctor
/// listings never walk the whole user tree.
#[derive(Clone)]
pub struct UserStore {
    engine: Arc<dyn StorageEngine>,
}

impl UserStore {
    pub fn new(engine: Arc<dyn StorageEngine>) -> Self {
        UserStore { engine }
    }

    /// Conditional insert. A second signup for the same email loses the
    /// swap and is rejected rather than silently overwriting the account.
    pub async fn create(&self, user: &User) -> MedResult<()> {
        let record = encode(user)?;
        let created = self
            .engine
            .compare_and_swap(trees::USERS, user.email.as_bytes(), None, Some(record))
            .await?;
        if !created {
            return Err(ValidationError::EmailAlreadyRegistered(user.email.clone()).into());
        }
        self.engine
            .insert(
                trees::USERS_BY_ROLE,
                &index_key(&user.role.to_string(), &user.email),
                user.email.clone().into_bytes(),
            )
            .await?;
        Ok(())
    }

    pub async fn get(&self, email: &str) -> MedResult<Option<User>> {
        match self.engine.retrieve(trees::USERS, email.as_bytes()).await? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// All registered doctors, via the role index. A dangling index entry
    /// (user record missing) is skipped with a warning.
    pub async fn list_doctors(&self) -> MedResult<Vec<User>> {
        let entries = self
            .engine
            .scan_prefix(
                trees::USERS_BY_ROLE,
                &index_scan_prefix(&Role::Doctor.to_string()),
            )
            .await?;

        let mut doctors = Vec::with_capacity(entries.len());
        for (_, email_bytes) in entries {
            let email = String::from_utf8_lossy(&email_bytes).into_owned();
            match self.get(&email).await {
                Ok(Some(user)) => doctors.push(user),
                Ok(None) => warn!("role index points at missing user {}", email),
                Err(e) => {
                    warn!("failed to load doctor {}: {}", email, e);
                    return Err(e);
                }
            }
        }
        Ok(doctors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::MedTrackError;
    use chrono::Utc;
    use crate::storage_engine::InMemoryStorage;

    fn user(email: &str, role: Role) -> User {
        User {
            email: email.to_string(),
            name: "Test".to_string(),
            password_hash: "hash".to_string(),
            role,
            age: "30".to_string(),
            gender: "other".to_string(),
            specialization: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = UserStore::new(Arc::new(InMemoryStorage::new()));
        store.create(&user("ann@x.com", Role::Patient)).await.unwrap();
        let err = store.create(&user("ann@x.com", Role::Doctor)).await.unwrap_err();
        assert!(matches!(
            err,
            MedTrackError::Validation(ValidationError::EmailAlreadyRegistered(_))
        ));
    }

    #[tokio::test]
    async fn list_doctors_only_returns_doctors() {
        let store = UserStore::new(Arc::new(InMemoryStorage::new()));
        store.create(&user("ann@x.com", Role::Patient)).await.unwrap();
        store.create(&user("grey@x.com", Role::Doctor)).await.unwrap();
        store.create(&user("house@x.com", Role::Doctor)).await.unwrap();

        let doctors = store.list_doctors().await.unwrap();
        assert_eq!(doctors.len(), 2);
        assert!(doctors.iter().all(|d| d.role == Role::Doctor));
    }
}
