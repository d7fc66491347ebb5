// server/src/routes/mod.rs

pub mod appointment_routes;
pub mod auth_routes;
pub mod dashboard_routes;
pub mod pages;
pub mod profile_routes;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// The full HTTP surface. Paths (including the mixed -/_ spellings) match
/// the original application verbatim.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/getstarted", get(pages::get_started))
        .route("/aboutus", get(pages::aboutus))
        .route("/contactus", get(pages::contactus))
        .route("/signup", get(auth_routes::signup_page).post(auth_routes::signup))
        .route("/login", get(auth_routes::login_page).post(auth_routes::login))
        .route("/logout", get(auth_routes::logout))
        .route("/patient_details", get(profile_routes::patient_details))
        .route("/doctor_details", get(profile_routes::doctor_details))
        .route("/save_patient_details", post(profile_routes::save_patient_details))
        .route("/save-doctor-details", post(profile_routes::save_doctor_details))
        .route("/appointment_dashboard", get(appointment_routes::appointment_dashboard))
        .route("/submit-appointment", post(appointment_routes::submit_appointment))
        .route("/doctor_dashboard", get(appointment_routes::doctor_dashboard))
        .route("/submit_prescription", post(appointment_routes::submit_prescription))
        .route("/patient_dashboard", get(dashboard_routes::patient_dashboard))
        .route("/view_patient/:patient_email", get(dashboard_routes::view_patient))
        .with_state(state)
}
