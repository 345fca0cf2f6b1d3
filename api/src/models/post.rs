/// A blog post.
///
/// `title` is the natural key used for lookup and deletion. It is not unique
/// and, like the other fields, may be absent when the submitted form omitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: Some(author.into()),
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Exact, case-sensitive title comparison. A post without a title never matches.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.as_deref() == Some(title)
    }
}
