// server/src/extract.rs

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;
use models::users::Role;

use lib::auth::{resolve_current_user, CurrentUser};

use crate::error::ApiError;
use crate::state::{AppState, SESSION_COOKIE};

/// The authenticated identity for this request, resolved once from the
/// session cookie and passed explicitly into handlers. Extraction fails
/// with 401 when there is no live session; store failures during
/// resolution read as logged out, same thing.
pub struct Authed(pub CurrentUser);

impl Authed {
    pub fn require_role(&self, role: Role) -> Result<(), ApiError> {
        if self.0.role() == role {
            Ok(())
        } else {
            Err(ApiError::Forbidden(role))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Authed {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .ok_or(ApiError::Unauthorized)?;

        let current = resolve_current_user(
            state.sessions(),
            state.users(),
            state.doctor_profiles(),
            token,
        )
        .await
        .map_err(ApiError::from)?
        .ok_or(ApiError::Unauthorized)?;

        Ok(Authed(current))
    }
}

/// Session token if the request carries one, without requiring it to be
/// live. Used by logout, which clears whatever is there.
pub struct MaybeToken(pub Option<Uuid>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeToken {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());
        Ok(MaybeToken(token))
    }
}
