//! `admin_auth` session cookie codec.
//!
//! The cookie value is the whole authentication signal: `1` means signed in,
//! anything else (including an empty, cleared cookie) means signed out.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

pub const ADMIN_COOKIE_NAME: &str = "admin_auth";
pub const AUTHENTICATED_VALUE: &str = "1";
pub const SESSION_MAX_AGE: Duration = Duration::hours(8);

/// Cookie issued after a successful login.
#[must_use]
pub fn issue(secure: bool) -> Cookie<'static> {
    build(AUTHENTICATED_VALUE, SESSION_MAX_AGE, secure)
}

/// Cookie that overwrites and immediately expires the session.
#[must_use]
pub fn clear(secure: bool) -> Cookie<'static> {
    build("", Duration::ZERO, secure)
}

fn build(value: &'static str, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((ADMIN_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// True iff the jar carries `admin_auth=1`.
#[must_use]
pub fn is_authenticated(jar: &CookieJar) -> bool {
    jar.get(ADMIN_COOKIE_NAME)
        .is_some_and(|cookie| cookie.value() == AUTHENTICATED_VALUE)
}

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;
