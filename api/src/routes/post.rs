use super::found;
use crate::{
    AppState, dto::NewPostForm, errors::BlogError, models::Post, session, views,
};
use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use maud::Markup;
use tracing::{info, warn};

/// GET /new-post
/// Cookie: email=<identity>
pub async fn new_post_page(jar: CookieJar) -> Result<Markup, BlogError> {
    if session::resolve(&jar).is_none() {
        return Err(BlogError::Unauthorized(
            "You must be logged in to write posts".into(),
        ));
    }

    Ok(views::new_post())
}

/// POST /new-post
/// Body: author=...&title=...&content=...
///
/// The logged-in identity, when there is one, replaces the submitted author.
/// A body that cannot be read as a form still creates a post, with every field
/// absent.
pub async fn create_post(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<NewPostForm>, FormRejection>,
) -> impl IntoResponse {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Unreadable post form, storing empty post: {}", rejection);
            NewPostForm::default()
        }
    };

    let post = Post {
        author: session::resolve(&jar).or(form.author),
        title: form.title,
        content: form.content,
    };

    state.posts.append(post).await;

    found("/posts")
}

/// GET /posts
pub async fn get_posts(State(state): State<AppState>) -> Markup {
    let posts = state.posts.list().await;
    views::all_posts(&posts)
}

/// GET /posts/{title}
pub async fn get_post(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Markup, BlogError> {
    let post = state
        .posts
        .find_by_title(&title)
        .await
        .ok_or_else(|| BlogError::NotFound(format!("There is no post titled \"{title}\"")))?;

    Ok(views::post(&post))
}

/// GET /delete-post/{title}
/// No ownership check: any visitor may delete any post.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> impl IntoResponse {
    let removed = state.posts.delete_by_title(&title).await;

    if removed == 0 {
        info!("Nothing to delete for title {:?}", title);
    }

    found("/posts")
}
