//! Admin auth routes: shared-secret login, logout, and session check.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::cookie;
use crate::state::AppState;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AdminAuthError {
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),
    /// Wrong, empty, and missing passwords all map here.
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Not authenticated")]
    Unauthenticated,
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed(_) => {
                (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "POST")], self.to_string()).into_response()
            }
            Self::InvalidPassword | Self::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "error": self.to_string() }))).into_response()
            }
        }
    }
}

// =============================================================================
// SESSION EXTRACTOR
// =============================================================================

/// Proof that the request carries a live `admin_auth` cookie.
/// Use as a handler parameter to require an admin session.
#[derive(Debug)]
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AdminAuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if cookie::is_authenticated(&jar) {
            Ok(Self)
        } else {
            Err(AdminAuthError::Unauthenticated)
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    password: Option<String>,
}

/// `POST /admin-auth/login`: check the password, set the session cookie.
///
/// A missing or unparseable body is treated the same as a wrong password.
///
/// # Errors
///
/// Returns [`AdminAuthError::InvalidPassword`] if the password is missing,
/// empty, or does not match the configured secret.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<Value>), AdminAuthError> {
    let password = match body {
        Ok(Json(req)) => req.password.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "admin login body rejected");
            String::new()
        }
    };

    if password.is_empty() {
        tracing::warn!(action = "admin_login_failed", reason = "missing_password", "admin login rejected");
        return Err(AdminAuthError::InvalidPassword);
    }
    if !state.config.matches_secret(&password) {
        tracing::warn!(action = "admin_login_failed", reason = "mismatch", "admin login rejected");
        return Err(AdminAuthError::InvalidPassword);
    }

    let jar = CookieJar::new().add(cookie::issue(state.config.secure_cookies()));
    tracing::info!(action = "admin_login", "admin session issued");
    Ok((jar, Json(json!({ "ok": true }))))
}

/// `POST /admin-auth/logout`: clear the session cookie. Always succeeds.
pub async fn logout(State(state): State<AppState>) -> (CookieJar, Json<Value>) {
    let jar = CookieJar::new().add(cookie::clear(state.config.secure_cookies()));
    tracing::info!(action = "admin_logout", "admin session cleared");
    (jar, Json(json!({ "ok": true })))
}

/// `GET /admin-auth/session`: report whether the caller holds a session.
pub async fn session(_admin: AdminSession) -> Json<Value> {
    Json(json!({ "authenticated": true }))
}

/// Fallback for any verb other than POST on the login/logout routes.
pub async fn method_not_allowed(method: Method) -> AdminAuthError {
    AdminAuthError::MethodNotAllowed(method)
}

#[cfg(test)]
#[path = "admin_auth_test.rs"]
mod tests;
