// server/src/routes/auth_routes.rs

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use log::info;
use serde_json::{json, Value};
use models::users::Role;

use lib::services::{LoginForm, SignupForm};

use crate::error::ApiError;
use crate::extract::MaybeToken;
use crate::state::{AppState, SESSION_COOKIE};

fn session_cookie(token: &uuid::Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .build()
}

pub async fn signup_page() -> Json<Value> {
    Json(json!({
        "page": "signup",
        "fields": ["role", "name", "email", "password", "confirm_password", "age", "gender", "specialization"],
        "roles": ["patient", "doctor"],
    }))
}

/// Create the account, establish the session, and send the caller to the
/// role-appropriate profile-entry page.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let outcome = state.auth().signup(form).await?;
    let destination = match outcome.role {
        Role::Doctor => "/doctor_details",
        Role::Patient => "/patient_details",
    };
    Ok((jar.add(session_cookie(&outcome.token)), Redirect::to(destination)))
}

pub async fn login_page() -> Json<Value> {
    Json(json!({
        "page": "login",
        "fields": ["email", "password"],
    }))
}

/// Authenticate and land on the role's dashboard. Failures come back as the
/// same generic 401 whatever the cause.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let outcome = state.auth().login(form).await?;
    let destination = match outcome.role {
        Role::Doctor => "/doctor_dashboard",
        Role::Patient => "/patient_dashboard",
    };
    Ok((jar.add(session_cookie(&outcome.token)), Redirect::to(destination)))
}

/// Clear the session unconditionally. Safe to call without one.
pub async fn logout(
    State(state): State<AppState>,
    MaybeToken(token): MaybeToken,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ApiError> {
    if let Some(token) = token {
        state.auth().logout(token).await?;
        info!("session {} cleared", token);
    }
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    Ok((jar.remove(removal), Redirect::to("/")))
}
