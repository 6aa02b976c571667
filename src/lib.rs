//! Shared-secret admin session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server side: `POST /admin-auth/login` trades the admin password for an
//! `admin_auth` cookie and `POST /admin-auth/logout` clears it. Client side:
//! [`guard::AuthGuard`] keeps protected views hidden while no auth token is
//! held and redirects to the login view.

pub mod config;
pub mod cookie;
pub mod guard;
pub mod routes;
pub mod state;
