use crate::models::Post;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

// ============================================================================
// POST REPOSITORY - In-memory, insertion-ordered post collection
// ============================================================================
/// Owns the post sequence. Nothing outside this type can touch the `Vec`;
/// handlers get cloned snapshots or go through `append` / `delete_by_title`.
///
/// Cloning the repository is cheap and every clone shares the same sequence.
/// The `RwLock` gives one writer at a time and a consistent snapshot to readers,
/// so ordering holds under the multi-threaded runtime.
#[derive(Clone, Default)]
pub struct PostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl PostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }

    /// All posts in insertion order.
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// First post (in insertion order) whose title equals `title` exactly.
    pub async fn find_by_title(&self, title: &str) -> Option<Post> {
        let posts = self.posts.read().await;
        debug!("Looking up post {:?} among {} posts", title, posts.len());
        posts.iter().find(|p| p.has_title(title)).cloned()
    }

    /// Adds `post` to the end of the sequence. Titles are not checked for collisions.
    pub async fn append(&self, post: Post) {
        let mut posts = self.posts.write().await;
        info!(
            "Post appended: {:?} by {:?}",
            post.title.as_deref().unwrap_or_default(),
            post.author.as_deref().unwrap_or_default()
        );
        posts.push(post);
    }

    /// Removes every post titled `title` and returns how many went.
    /// Nothing matching is not an error.
    pub async fn delete_by_title(&self, title: &str) -> usize {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| !p.has_title(title));
        let removed = before - posts.len();

        info!("Posts deleted: {} titled {:?}", removed, title);

        removed
    }
}
