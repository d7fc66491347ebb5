// lib/src/auth/identity.rs

use log::warn;
use uuid::Uuid;
use models::errors::MedResult;
use models::profiles::DoctorProfile;
use models::users::{Role, User};

use crate::auth::session::SessionStore;
use crate::stores::{DoctorProfileStore, UserStore};

/// The authenticated identity for one request, built once and passed
/// explicitly to handlers. Doctors carry their profile alongside because
/// the dashboard always needs it.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub doctor_profile: Option<DoctorProfile>,
}

impl CurrentUser {
    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Resolve a session token to the authenticated user, fetching the doctor
/// profile when the role calls for it. Any store failure along the way
/// degrades to "no user" (logged out) rather than erroring, so a flaky
/// backend never turns a page view into a failure page.
pub async fn resolve_current_user(
    sessions: &SessionStore,
    users: &UserStore,
    doctor_profiles: &DoctorProfileStore,
    token: Uuid,
) -> MedResult<Option<CurrentUser>> {
    let email = match sessions.resolve(token).await {
        Ok(Some(email)) => email,
        Ok(None) => return Ok(None),
        Err(e) => {
            warn!("session resolution failed, treating as logged out: {}", e);
            return Ok(None);
        }
    };

    let user = match users.get(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(None),
        Err(e) => {
            warn!("user lookup for {} failed, treating as logged out: {}", email, e);
            return Ok(None);
        }
    };

    let doctor_profile = if user.is_doctor() {
        match doctor_profiles.get(&email).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("doctor profile lookup for {} failed: {}", email, e);
                None
            }
        }
    } else {
        None
    };

    Ok(Some(CurrentUser { user, doctor_profile }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use chrono::Utc;
    use crate::storage_engine::InMemoryStorage;

    #[tokio::test]
    async fn doctor_identity_carries_profile() {
        let engine: Arc<dyn crate::storage_engine::StorageEngine> =
            Arc::new(InMemoryStorage::new());
        let users = UserStore::new(engine.clone());
        let doctor_profiles = DoctorProfileStore::new(engine.clone());
        let sessions = SessionStore::new(engine.clone(), 3600);

        users
            .create(&User {
                email: "grey@x.com".to_string(),
                name: "Dr. Grey".to_string(),
                password_hash: "h".to_string(),
                role: Role::Doctor,
                age: "40".to_string(),
                gender: "female".to_string(),
                specialization: Some("surgery".to_string()),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        doctor_profiles
            .save(&DoctorProfile {
                email: "grey@x.com".to_string(),
                availability: "Mon-Fri 9-5".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let token = sessions.create("grey@x.com").await.unwrap();
        let current = resolve_current_user(&sessions, &users, &doctor_profiles, token)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.role(), Role::Doctor);
        assert_eq!(
            current.doctor_profile.unwrap().availability,
            "Mon-Fri 9-5"
        );
    }

    #[tokio::test]
    async fn dangling_session_resolves_to_logged_out() {
        let engine: Arc<dyn crate::storage_engine::StorageEngine> =
            Arc::new(InMemoryStorage::new());
        let users = UserStore::new(engine.clone());
        let doctor_profiles = DoctorProfileStore::new(engine.clone());
        let sessions = SessionStore::new(engine.clone(), 3600);

        // Session exists but the user record does not.
        let token = sessions.create("ghost@x.com").await.unwrap();
        let current = resolve_current_user(&sessions, &users, &doctor_profiles, token)
            .await
            .unwrap();
        assert!(current.is_none());
    }
}
