//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the read-only admin auth configuration. There is no session
//! store: the cookie itself is the session.

use std::sync::Arc;

use crate::config::AdminAuthConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the config is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AdminAuthConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AdminAuthConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
