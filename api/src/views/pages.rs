use super::{SITE_NAME, layout};
use maud::{Markup, html};

/// Home page. Greets the visitor when an identity is present.
pub fn home(email: Option<&str>) -> Markup {
    let content = match email {
        Some(email) => html! {
            h1 { "Welcome back " (email) }
            a href="/log-out" { "Log out" }
        },
        None => html! {
            h1 { (SITE_NAME) }
            a href="/log-in" { "Log in" }
        },
    };

    layout("Home", content)
}

pub fn log_in() -> Markup {
    layout(
        "Log in",
        html! {
            h1 { "Log in to your account" }
            form action="/log-in" method="POST" {
                label for="email" {
                    "Your email" span aria-hidden="true" { "*" }
                }
                input id="email" type="email" name="email" required;
                button type="submit" { "Log in" }
            }
        },
    )
}
