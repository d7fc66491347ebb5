// server/src/state.rs

use std::sync::Arc;

use lib::auth::SessionStore;
use lib::config::AppConfig;
use lib::notifier::build_notifier;
use lib::services::{AppointmentService, AuthService, DashboardService};
use lib::storage_engine::StorageEngine;
use lib::stores::{
    AppointmentStore, DoctorProfileStore, MedicalHistoryStore, PatientProfileStore, UserStore,
};

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "medtrack_session";

/// Shared application state: one engine, the typed stores over it, and the
/// services the handlers call. Cheap to clone, everything is Arc'd inside.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    auth: AuthService,
    appointments: AppointmentService,
    dashboards: DashboardService,
    sessions: SessionStore,
    users: UserStore,
    patient_profiles: PatientProfileStore,
    doctor_profiles: DoctorProfileStore,
}

impl AppState {
    pub fn new(engine: Arc<dyn StorageEngine>, config: &AppConfig) -> Self {
        let users = UserStore::new(engine.clone());
        let patient_profiles = PatientProfileStore::new(engine.clone());
        let doctor_profiles = DoctorProfileStore::new(engine.clone());
        let appointment_store = AppointmentStore::new(engine.clone());
        let history = MedicalHistoryStore::new(engine.clone());
        let sessions = SessionStore::new(engine, config.session_lifetime_secs);
        let notifier = build_notifier(config.notification_topic.as_deref());

        let auth = AuthService::new(users.clone(), sessions.clone(), notifier.clone());
        let appointments = AppointmentService::new(
            users.clone(),
            doctor_profiles.clone(),
            appointment_store.clone(),
            history.clone(),
            notifier,
        );
        let dashboards = DashboardService::new(
            users.clone(),
            patient_profiles.clone(),
            appointment_store,
            history,
        );

        AppState {
            inner: Arc::new(Inner {
                auth,
                appointments,
                dashboards,
                sessions,
                users,
                patient_profiles,
                doctor_profiles,
            }),
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    pub fn appointments(&self) -> &AppointmentService {
        &self.inner.appointments
    }

    pub fn dashboards(&self) -> &DashboardService {
        &self.inner.dashboards
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    pub fn patient_profiles(&self) -> &PatientProfileStore {
        &self.inner.patient_profiles
    }

    pub fn doctor_profiles(&self) -> &DoctorProfileStore {
        &self.inner.doctor_profiles
    }
}
