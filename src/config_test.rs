use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

// =============================================================================
// DeployEnvironment
// =============================================================================

#[test]
fn deploy_environment_production_exact() {
    assert_eq!(DeployEnvironment::parse(Some("production")), DeployEnvironment::Production);
}

#[test]
fn deploy_environment_other_values_are_development() {
    for raw in ["development", "test", "Production", " production", ""] {
        assert_eq!(DeployEnvironment::parse(Some(raw)), DeployEnvironment::Development, "{raw:?}");
    }
    assert_eq!(DeployEnvironment::parse(None), DeployEnvironment::Development);
}

// =============================================================================
// AdminAuthConfig::from_lookup
// =============================================================================

#[test]
fn from_lookup_reads_secret_and_environment() {
    let cfg = AdminAuthConfig::from_lookup(lookup_from(&[("ADMIN_SECRET", "hunter2"), ("APP_ENV", "production")]))
        .unwrap();
    assert_eq!(cfg.environment, DeployEnvironment::Production);
    assert!(cfg.secure_cookies());
    assert!(cfg.matches_secret("hunter2"));
}

#[test]
fn from_lookup_defaults_to_development() {
    let cfg = AdminAuthConfig::from_lookup(lookup_from(&[("ADMIN_SECRET", "hunter2")])).unwrap();
    assert_eq!(cfg.environment, DeployEnvironment::Development);
    assert!(!cfg.secure_cookies());
}

#[test]
fn from_lookup_missing_secret_errors() {
    let err = AdminAuthConfig::from_lookup(lookup_from(&[("APP_ENV", "production")])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingSecret { var: "ADMIN_SECRET" }));
    assert_eq!(err.to_string(), "ADMIN_SECRET must be set");
}

#[test]
fn from_lookup_empty_secret_errors() {
    let err = AdminAuthConfig::from_lookup(lookup_from(&[("ADMIN_SECRET", "")])).unwrap_err();
    assert!(matches!(err, ConfigError::EmptySecret { .. }));
}

// =============================================================================
// secret handling
// =============================================================================

#[test]
fn matches_secret_is_exact() {
    let cfg = AdminAuthConfig::new("s3cret", DeployEnvironment::Development).unwrap();
    assert!(cfg.matches_secret("s3cret"));
    assert!(!cfg.matches_secret("s3cret "));
    assert!(!cfg.matches_secret("S3CRET"));
    assert!(!cfg.matches_secret(""));
}

#[test]
fn debug_output_redacts_secret() {
    let cfg = AdminAuthConfig::new("do-not-print-me", DeployEnvironment::Development).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("do-not-print-me"));
}
