use super::found;
use crate::{dto::LogInForm, session, views};
use axum::{Form, extract::rejection::FormRejection, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use maud::Markup;
use tracing::{info, warn};

/// GET /log-in
pub async fn log_in_page() -> Markup {
    views::log_in()
}

/// POST /log-in
/// Body: email=...
///
/// Whatever email is submitted becomes the identity; there is no password.
/// Without an email no cookie is set, but the redirect still happens.
pub async fn log_in(
    jar: CookieJar,
    form: Result<Form<LogInForm>, FormRejection>,
) -> impl IntoResponse {
    let email = form
        .ok()
        .and_then(|Form(form)| form.email)
        .filter(|email| !email.is_empty());

    let jar = match email {
        Some(email) => {
            info!("User logged in: {}", email);
            jar.add(session::establish(email))
        }
        None => {
            warn!("Log in submitted without an email");
            jar
        }
    };

    (jar, found("/"))
}

/// GET /log-out
pub async fn log_out(jar: CookieJar) -> impl IntoResponse {
    if let Some(email) = session::resolve(&jar) {
        info!("User logged out: {}", email);
    }

    (jar.add(session::clear()), found("/"))
}
