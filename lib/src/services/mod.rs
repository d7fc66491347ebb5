// lib/src/services/mod.rs

pub mod appointment_service;
pub mod auth_service;
pub mod dashboard_service;

pub use appointment_service::{
    AppointmentForm, AppointmentService, BookableDoctor, PrescriptionForm,
};
pub use auth_service::{AuthOutcome, AuthService, LoginForm, SignupForm};
pub use dashboard_service::{DashboardService, PatientDashboard, PatientRecordView};
