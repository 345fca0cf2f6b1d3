use super::layout;
use crate::models::Post;
use maud::{Markup, html};

pub fn new_post() -> Markup {
    layout(
        "New post",
        html! {
            h1 { "Add a new post" }
            form action="/new-post" method="POST" {
                label for="title" {
                    "Post title" span aria-hidden="true" { "*" }
                }
                input id="title" type="text" name="title" required;

                label for="content" { "Post content" }
                textarea id="content" name="content" {}

                button type="submit" { "Save post" }
            }
        },
    )
}

/// Index of every post, each with a view link and a delete link.
pub fn all_posts(posts: &[Post]) -> Markup {
    layout(
        "All posts",
        html! {
            h1 { "All posts" }
            ul {
                @for post in posts {
                    @let title = post.title.as_deref().unwrap_or_default();
                    li {
                        a href={ "/posts/" (title) } { (title) }
                        a href={ "/delete-post/" (title) }
                            aria-label={ "Delete post titled " (title) } { "🗑" }
                    }
                }
            }
        },
    )
}

/// A single post. Missing fields render as empty text.
pub fn post(post: &Post) -> Markup {
    let title = post.title.as_deref().unwrap_or_default();

    layout(
        title,
        html! {
            h1 { (title) }
            main { (post.content.as_deref().unwrap_or_default()) }
            div { "Written by " (post.author.as_deref().unwrap_or_default()) }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_posts_lists_in_given_order() {
        let posts = vec![Post::new("a", "first", ""), Post::new("b", "second", "")];
        let html = all_posts(&posts).into_string();

        let first = html.find(r#"href="/posts/first""#).unwrap();
        let second = html.find(r#"href="/posts/second""#).unwrap();
        assert!(first < second);
        assert!(html.contains(r#"href="/delete-post/first""#));
        assert!(html.contains(r#"aria-label="Delete post titled second""#));
    }

    #[test]
    fn test_all_posts_empty() {
        let html = all_posts(&[]).into_string();
        assert!(html.contains("<ul></ul>"));
    }

    #[test]
    fn test_post_shows_fields() {
        let html = post(&Post::new("oli", "hello", "lorem ipsum etc")).into_string();
        assert!(html.contains("<h1>hello</h1>"));
        assert!(html.contains("<main>lorem ipsum etc</main>"));
        assert!(html.contains("Written by oli"));
    }

    #[test]
    fn test_post_with_absent_fields() {
        let html = post(&Post::default()).into_string();
        assert!(html.contains("<h1></h1>"));
        assert!(html.contains("Written by "));
    }

    #[test]
    fn test_new_post_form_fields() {
        let html = new_post().into_string();
        assert!(html.contains(r#"action="/new-post""#));
        assert!(html.contains(r#"name="title""#));
        assert!(html.contains(r#"name="content""#));
    }
}
