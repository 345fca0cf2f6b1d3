//! Route table.
//!
//! - `GET  /`                     - Home page
//! - `GET  /health`               - Health check (JSON)
//! - `GET  /new-post`             - New post form (401 when logged out)
//! - `POST /new-post`             - Create a post, redirect to `/posts`
//! - `GET  /posts`                - All posts
//! - `GET  /posts/{title}`        - Single post (404 when no title matches)
//! - `GET  /delete-post/{title}`  - Delete every post with that title
//! - `GET  /log-in`               - Login form
//! - `POST /log-in`               - Set the identity cookie, redirect to `/`
//! - `GET  /log-out`              - Clear the identity cookie, redirect to `/`
//!
//! Anything else is looked up in the static asset directory.

mod health;
mod home;
mod post;
mod user;

use crate::states::AppState;
use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tower_http::services::ServeDir;

pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/new-post", get(post::new_post_page).post(post::create_post))
        .route("/posts", get(post::get_posts))
        .route("/posts/{title}", get(post::get_post))
        .route("/delete-post/{title}", get(post::delete_post))
        .route("/log-in", get(user::log_in_page).post(user::log_in))
        .route("/log-out", get(user::log_out))
        .fallback_service(static_files)
        .with_state(state)
}

/// `302 Found` redirect, the status browsers follow with a GET after a form post.
fn found(location: &'static str) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, location)])
}
