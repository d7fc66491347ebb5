// server/src/routes/dashboard_routes.rs

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use models::users::Role;

use crate::error::ApiError;
use crate::extract::Authed;
use crate::state::AppState;

/// The patient's own appointments, profile, and history. Each section is
/// loaded independently; a failing store blanks that section only.
pub async fn patient_dashboard(
    State(state): State<AppState>,
    authed: Authed,
) -> Result<Json<Value>, ApiError> {
    authed.require_role(Role::Patient)?;
    let dashboard = state.dashboards().patient_dashboard(authed.0.email()).await?;
    Ok(Json(json!({
        "page": "patient_dashboard",
        "user": { "name": authed.0.user.name, "email": authed.0.user.email },
        "appointments": dashboard.appointments,
        "details": dashboard.profile,
        "medical_history": dashboard.history,
    })))
}

/// One patient's full record, for doctors. Any authenticated doctor may
/// view any patient; there is no treated-by restriction.
pub async fn view_patient(
    State(state): State<AppState>,
    authed: Authed,
    Path(patient_email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    authed.require_role(Role::Doctor)?;
    let view = state.dashboards().view_patient(&patient_email).await?;
    // The stored record includes the password hash; only the public fields
    // leave the server.
    let patient = view.patient.map(|p| {
        json!({
            "email": p.email,
            "name": p.name,
            "age": p.age,
            "gender": p.gender,
        })
    });
    Ok(Json(json!({
        "page": "view_patient",
        "patient": patient,
        "details": view.profile,
        "medical_history": view.history,
    })))
}
