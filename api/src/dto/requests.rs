use serde::Deserialize;

/// Body of `POST /new-post`. Every field is optional; nothing is validated.
#[derive(Debug, Default, Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `POST /log-in`.
#[derive(Debug, Default, Deserialize)]
pub struct LogInForm {
    #[serde(default)]
    pub email: Option<String>,
}
