//! Application configuration loaded from environment variables.

use anyhow::Context;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (e.g. "0.0.0.0").
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Directory served for any path the route table does not match.
    pub static_dir: String,

    /// Start with the single "hello" post instead of an empty blog.
    pub seed_posts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "public".to_string(),
            seed_posts: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `HOST`: bind host (default: "0.0.0.0")
    /// - `PORT`: bind port (default: 3000)
    /// - `STATIC_DIR`: static asset directory (default: "public")
    /// - `SEED_POSTS`: "false"/"0" starts with no posts (default: true)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => defaults.port,
        };

        let static_dir = std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let seed_posts = std::env::var("SEED_POSTS")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(defaults.seed_posts);

        tracing::info!(
            host = %host,
            port,
            static_dir = %static_dir,
            seed_posts,
            "configuration loaded"
        );

        Ok(Self {
            host,
            port,
            static_dir,
            seed_posts,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
