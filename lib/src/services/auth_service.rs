// lib/src/services/auth_service.rs

use std::sync::Arc;
use chrono::Utc;
use log::info;
use serde::Deserialize;
use uuid::Uuid;
use models::errors::{MedResult, MedTrackError, ValidationError};
use models::users::{Role, User};

use crate::auth::{hash_password, verify_password, SessionStore};
use crate::notifier::Notifier;
use crate::stores::UserStore;

/// Signup form fields as submitted. Specialization only matters for
/// doctors and is discarded for patients.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub gender: String,
    #[serde(default)]
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Outcome of a successful signup or login: the session token to set and
/// the role that decides which page the caller lands on.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub token: Uuid,
    pub role: Role,
}

pub struct AuthService {
    users: UserStore,
    sessions: SessionStore,
    notifier: Arc<dyn Notifier>,
}

impl AuthService {
    pub fn new(users: UserStore, sessions: SessionStore, notifier: Arc<dyn Notifier>) -> Self {
        AuthService { users, sessions, notifier }
    }

    /// Create an account, announce it, and establish a session. Mismatched
    /// passwords and duplicate emails are validation failures; a store
    /// failure on the write surfaces to the caller.
    pub async fn signup(&self, form: SignupForm) -> MedResult<AuthOutcome> {
        if form.password != form.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        if form.email.is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }

        let password_hash = hash_password(&form.password)?;
        let user = User {
            email: form.email.clone(),
            name: form.name.clone(),
            password_hash,
            role: form.role,
            age: form.age,
            gender: form.gender,
            specialization: match form.role {
                Role::Doctor => form.specialization,
                Role::Patient => None,
            },
            created_at: Utc::now(),
        };

        self.users.create(&user).await?;
        info!("new {} account registered: {}", user.role, user.email);

        self.notifier
            .publish(
                "New User Registration",
                &format!(
                    "Welcome {}! Your {} account has been created successfully.",
                    user.name, user.role
                ),
            )
            .await;

        let token = self.sessions.create(&user.email).await?;
        Ok(AuthOutcome { token, role: user.role })
    }

    /// Authenticate and establish a session. An unknown email and a wrong
    /// password return the identical generic error; nothing distinguishes
    /// the two to the caller.
    pub async fn login(&self, form: LoginForm) -> MedResult<AuthOutcome> {
        let user = self
            .users
            .get(&form.email)
            .await?
            .ok_or(MedTrackError::Auth)?;
        if !verify_password(&form.password, &user.password_hash) {
            return Err(MedTrackError::Auth);
        }

        let token = self.sessions.create(&user.email).await?;
        Ok(AuthOutcome { token, role: user.role })
    }

    /// Clear the session unconditionally; unknown tokens are a no-op.
    pub async fn logout(&self, token: Uuid) -> MedResult<()> {
        self.sessions.destroy(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::NoopNotifier;
    use crate::storage_engine::{InMemoryStorage, StorageEngine};

    fn service() -> (AuthService, UserStore) {
        let engine: Arc<dyn StorageEngine> = Arc::new(InMemoryStorage::new());
        let users = UserStore::new(engine.clone());
        let auth = AuthService::new(
            users.clone(),
            SessionStore::new(engine, 3600),
            Arc::new(NoopNotifier),
        );
        (auth, users)
    }

    fn signup_form(email: &str, password: &str, confirm: &str, role: Role) -> SignupForm {
        SignupForm {
            role,
            name: "Ann".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            age: "30".to_string(),
            gender: "female".to_string(),
            specialization: None,
        }
    }

    #[tokio::test]
    async fn signup_then_login_resolves_same_role() {
        let (auth, _users) = service();
        let signed_up = auth
            .signup(signup_form("ann@x.com", "p1", "p1", Role::Patient))
            .await
            .unwrap();
        assert_eq!(signed_up.role, Role::Patient);

        let logged_in = auth
            .login(LoginForm {
                email: "ann@x.com".to_string(),
                password: "p1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.role, Role::Patient);
        assert_ne!(logged_in.token, signed_up.token);
    }

    #[tokio::test]
    async fn mismatched_passwords_fail_validation() {
        let (auth, _users) = service();
        let err = auth
            .signup(signup_form("ann@x.com", "p1", "p2", Role::Patient))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MedTrackError::Validation(ValidationError::PasswordMismatch)
        ));
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let (auth, _users) = service();
        auth.signup(signup_form("ann@x.com", "p1", "p1", Role::Patient))
            .await
            .unwrap();

        let unknown = auth
            .login(LoginForm {
                email: "nobody@x.com".to_string(),
                password: "p1".to_string(),
            })
            .await
            .unwrap_err();
        let wrong = auth
            .login(LoginForm {
                email: "ann@x.com".to_string(),
                password: "p2".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(unknown, MedTrackError::Auth));
        assert!(matches!(wrong, MedTrackError::Auth));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let (auth, _users) = service();
        auth.signup(signup_form("ann@x.com", "p1", "p1", Role::Patient))
            .await
            .unwrap();
        let err = auth
            .signup(signup_form("ann@x.com", "p3", "p3", Role::Doctor))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MedTrackError::Validation(ValidationError::EmailAlreadyRegistered(_))
        ));
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let (auth, _users) = service();
        let outcome = auth
            .signup(signup_form("ann@x.com", "p1", "p1", Role::Patient))
            .await
            .unwrap();
        auth.logout(outcome.token).await.unwrap();
        auth.logout(outcome.token).await.unwrap();
    }

    #[tokio::test]
    async fn patient_specialization_is_discarded() {
        let (auth, users) = service();
        let mut form = signup_form("ann@x.com", "p1", "p1", Role::Patient);
        form.specialization = Some("cardiology".to_string());
        auth.signup(form).await.unwrap();

        let stored = users.get("ann@x.com").await.unwrap().unwrap();
        assert!(stored.specialization.is_none());
    }
}
