use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

// ============================================================================
// SESSION IDENTITY - Who the visitor claims to be
// ============================================================================
// The cookie value is an unverified claim: whatever string the client sends
// back is taken as the acting user. Nothing is signed or checked. Anything
// that needs a real credential belongs in a separate verifier, not here.

/// Cookie holding the plaintext identity.
pub const COOKIE_NAME: &str = "email";

/// Lifetime of the identity cookie, counted from the last login.
pub const MAX_AGE: Duration = Duration::milliseconds(600_000);

/// Reads the identity claim from the request cookies.
/// A missing or empty cookie means "logged out".
pub fn resolve(jar: &CookieJar) -> Option<String> {
    jar.get(COOKIE_NAME)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Cookie that stores `identity` for [`MAX_AGE`].
pub fn establish(identity: impl Into<String>) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, identity.into()))
        .path("/")
        .max_age(MAX_AGE)
        .build()
}

/// Expired, empty identity cookie. Adding it to the jar tells the browser to
/// drop the identity.
pub fn clear() -> Cookie<'static> {
    let mut cookie = Cookie::build(COOKIE_NAME).path("/").build();
    cookie.make_removal();
    cookie
}
