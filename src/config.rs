//! Admin gate configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Configuration is read once at startup and injected into handlers through
//! `AppState`. Handlers never consult the process environment themselves.
//! There is no built-in fallback secret: a missing `ADMIN_SECRET` stops the
//! server from starting.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

pub const ADMIN_SECRET_VAR: &str = "ADMIN_SECRET";
pub const APP_ENV_VAR: &str = "APP_ENV";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    MissingSecret { var: &'static str },
    #[error("{var} must not be empty")]
    EmptySecret { var: &'static str },
}

/// Deployment environment. Only `production` turns on `Secure` cookies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeployEnvironment {
    #[default]
    Development,
    Production,
}

impl DeployEnvironment {
    /// Anything other than the exact string `production` is development.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

#[derive(Debug)]
pub struct AdminAuthConfig {
    secret: SecretString,
    pub environment: DeployEnvironment,
}

impl AdminAuthConfig {
    /// Build a config from an explicit secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecret`] if `secret` is empty.
    pub fn new(secret: impl Into<String>, environment: DeployEnvironment) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret { var: ADMIN_SECRET_VAR });
        }
        Ok(Self { secret: SecretString::from(secret), environment })
    }

    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `ADMIN_SECRET`: shared admin password
    ///
    /// Optional:
    /// - `APP_ENV`: `production` enables `Secure` cookies
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `ADMIN_SECRET` is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AdminAuthConfig::from_env`] with a caller-provided lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `ADMIN_SECRET` is missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(ADMIN_SECRET_VAR).ok_or(ConfigError::MissingSecret { var: ADMIN_SECRET_VAR })?;
        let environment = DeployEnvironment::parse(lookup(APP_ENV_VAR).as_deref());
        Self::new(secret, environment)
    }

    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.environment.is_production()
    }

    /// Exact match against the configured secret, compared as SHA-256 digests.
    #[must_use]
    pub fn matches_secret(&self, candidate: &str) -> bool {
        let expected = Sha256::digest(self.secret.expose_secret().as_bytes());
        let submitted = Sha256::digest(candidate.as_bytes());
        expected == submitted
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
