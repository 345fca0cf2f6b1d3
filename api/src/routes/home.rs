use crate::{session, views};
use axum_extra::extract::cookie::CookieJar;
use maud::Markup;

/// GET /
pub async fn home_page(jar: CookieJar) -> Markup {
    let email = session::resolve(&jar);
    views::home(email.as_deref())
}
