use crate::{config::Config, models::Post, repository::PostRepository};
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Cloned into every handler. The repository and config are both behind
/// `Arc`, so a clone is a couple of reference-count bumps.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let posts = if config.seed_posts {
            PostRepository::with_posts(seed_posts())
        } else {
            PostRepository::new()
        };

        Self {
            posts,
            config: Arc::new(config),
        }
    }
}

/// The post a fresh blog starts with.
pub fn seed_posts() -> Vec<Post> {
    vec![Post::new("oli", "hello", "lorem ipsum etc")]
}
