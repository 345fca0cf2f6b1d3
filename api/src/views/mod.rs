//! HTML pages for the blog.
//!
//! Every function here is pure: typed data in, [`Markup`] out. Rendering uses
//! [maud](https://maud.lambda.xyz/), so all dynamic values are HTML-escaped.

mod pages;
mod posts;

pub use pages::{home, log_in};
pub use posts::{all_posts, new_post, post};

use maud::{DOCTYPE, Markup, html};

/// Site title shown in `<title>` and on the logged-out home page.
pub const SITE_NAME: &str = "Learn Axum";

/// Shared page shell: head, stylesheet link and the navigation bar.
pub fn layout(page_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/style.css";
            }
            body {
                header {
                    nav {
                        a href="/" { "Home" }
                        a href="/new-post" { "Write new post" }
                        a href="/posts" { "All posts" }
                    }
                }
                (content)
            }
        }
    }
}

/// Page shown for any error status.
pub fn error_page(title: &str, message: &str) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            p class="error" { (message) }
            a href="/" { "Back to home" }
        },
    )
}
