// server/src/routes/profile_routes.rs

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use models::profiles::{DoctorProfile, PatientProfile};
use models::users::Role;

use crate::error::ApiError;
use crate::extract::Authed;
use crate::state::AppState;

/// Profile form bodies carry no email; the key always comes from the
/// authenticated identity, never from the client.
#[derive(Debug, Deserialize)]
pub struct PatientDetailsForm {
    pub contact: String,
    pub address: String,
    pub height: String,
    pub weight: String,
    pub blood_group: String,
    pub allergies: String,
    pub conditions: String,
    pub history: String,
}

#[derive(Debug, Deserialize)]
pub struct DoctorDetailsForm {
    pub experience: String,
    pub clinic_address: String,
    pub contact: String,
    pub availability: String,
}

/// Profile-entry form for patients; pre-fills from the user record.
pub async fn patient_details(authed: Authed) -> Result<Json<Value>, ApiError> {
    authed.require_role(Role::Patient)?;
    Ok(Json(json!({
        "page": "patient_details",
        "user": { "name": authed.0.user.name, "email": authed.0.user.email },
        "fields": ["contact", "address", "height", "weight", "blood_group", "allergies", "conditions", "history"],
    })))
}

pub async fn doctor_details(authed: Authed) -> Result<Json<Value>, ApiError> {
    authed.require_role(Role::Doctor)?;
    Ok(Json(json!({
        "page": "doctor_details",
        "user": { "name": authed.0.user.name, "email": authed.0.user.email },
        "fields": ["experience", "clinic_address", "contact", "availability"],
    })))
}

/// Overwrite the patient profile wholesale. A store failure surfaces as
/// 503 instead of redirecting as if the save happened.
pub async fn save_patient_details(
    State(state): State<AppState>,
    authed: Authed,
    Form(form): Form<PatientDetailsForm>,
) -> Result<Redirect, ApiError> {
    let profile = PatientProfile {
        email: authed.0.email().to_string(),
        contact: form.contact,
        address: form.address,
        height: form.height,
        weight: form.weight,
        blood_group: form.blood_group,
        allergies: form.allergies,
        conditions: form.conditions,
        history: form.history,
    };
    state.patient_profiles().save(&profile).await?;
    Ok(Redirect::to("/patient_dashboard"))
}

pub async fn save_doctor_details(
    State(state): State<AppState>,
    authed: Authed,
    Form(form): Form<DoctorDetailsForm>,
) -> Result<Redirect, ApiError> {
    let profile = DoctorProfile {
        email: authed.0.email().to_string(),
        experience: form.experience,
        clinic_address: form.clinic_address,
        contact: form.contact,
        availability: form.availability,
    };
    state.doctor_profiles().save(&profile).await?;
    Ok(Redirect::to("/doctor_dashboard"))
}
