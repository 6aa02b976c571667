//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the admin auth endpoints and a health check under a single Axum
//! router with request tracing. Login and logout accept POST only; every
//! other verb lands in a fallback that answers 405.

pub mod admin_auth;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/admin-auth/login",
            post(admin_auth::login).fallback(admin_auth::method_not_allowed),
        )
        .route(
            "/admin-auth/logout",
            post(admin_auth::logout).fallback(admin_auth::method_not_allowed),
        )
        .route("/admin-auth/session", get(admin_auth::session))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
