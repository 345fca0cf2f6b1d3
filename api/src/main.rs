// ============================================================================
// SERVER-RENDERED BLOG
// ============================================================================

// - Posts kept in memory, listed in the order they were written
// - Cookie-based identity (unverified) for writing posts
// - HTML rendered per request
// - Static assets for everything else
// - Structured logging

use axum::http::Request;
use blog::{AppState, Config, router};
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();

    // Create application state
    let state = AppState::new(config);

    // Build the router
    let app = router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Routes:");
    info!("  GET    /                     - Home");
    info!("  GET    /new-post             - New post form (login)");
    info!("  POST   /new-post             - Create post");
    info!("  GET    /posts                - List posts");
    info!("  GET    /posts/:title         - Show post");
    info!("  GET    /delete-post/:title   - Delete post");
    info!("  GET    /log-in               - Login form");
    info!("  POST   /log-in               - Log in");
    info!("  GET    /log-out              - Log out");

    axum::serve(listener, app).await?;

    Ok(())
}
