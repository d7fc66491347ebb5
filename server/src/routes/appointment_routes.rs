// server/src/routes/appointment_routes.rs

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use serde_json::{json, Value};
use models::users::Role;

use lib::services::{AppointmentForm, PrescriptionForm};

use crate::error::ApiError;
use crate::extract::Authed;
use crate::state::AppState;

/// Booking page for patients: every registered doctor with availability.
pub async fn appointment_dashboard(
    State(state): State<AppState>,
    authed: Authed,
) -> Result<Json<Value>, ApiError> {
    authed.require_role(Role::Patient)?;
    let doctors = state.appointments().list_bookable_doctors().await?;
    Ok(Json(json!({
        "page": "appointment_booking",
        "user": { "name": authed.0.user.name, "email": authed.0.user.email },
        "doctors": doctors,
    })))
}

/// Create the appointment and land back on the patient dashboard. Requires
/// a session but not a role, matching the original surface.
pub async fn submit_appointment(
    State(state): State<AppState>,
    _authed: Authed,
    Form(form): Form<AppointmentForm>,
) -> Result<Redirect, ApiError> {
    state.appointments().submit_appointment(form).await?;
    Ok(Redirect::to("/patient_dashboard"))
}

/// The doctor's schedule, matched by display name.
pub async fn doctor_dashboard(
    State(state): State<AppState>,
    authed: Authed,
) -> Result<Json<Value>, ApiError> {
    authed.require_role(Role::Doctor)?;
    let appointments = state
        .appointments()
        .doctor_appointments(&authed.0.user.name)
        .await?;
    Ok(Json(json!({
        "page": "doctor_dashboard",
        "user": { "name": authed.0.user.name, "email": authed.0.user.email },
        "doctor_details": authed.0.doctor_profile,
        "appointments": appointments,
    })))
}

/// Complete a visit. Empty fields are accepted and ignored (the original
/// dashboard posts them that way); conflicts and unknown ids are errors.
pub async fn submit_prescription(
    State(state): State<AppState>,
    authed: Authed,
    Form(form): Form<PrescriptionForm>,
) -> Result<Redirect, ApiError> {
    authed.require_role(Role::Doctor)?;
    state.appointments().submit_prescription(form).await?;
    Ok(Redirect::to("/doctor_dashboard"))
}
