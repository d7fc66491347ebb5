// server/src/routes/pages.rs
//
// Landing and informational pages. Rendering is out of scope, so these
// return the page metadata a template layer would consume.

use axum::Json;
use serde_json::{json, Value};

pub async fn index() -> Json<Value> {
    Json(json!({
        "page": "index",
        "title": "MedTrack",
        "description": "Register, book appointments with doctors, and keep your medical history in one place.",
    }))
}

pub async fn get_started() -> Json<Value> {
    Json(json!({
        "page": "getstarted",
        "title": "Get Started",
        "signup": "/signup",
        "login": "/login",
    }))
}

pub async fn aboutus() -> Json<Value> {
    Json(json!({
        "page": "aboutus",
        "title": "About Us",
    }))
}

pub async fn contactus() -> Json<Value> {
    Json(json!({
        "page": "contactus",
        "title": "Contact Us",
    }))
}
