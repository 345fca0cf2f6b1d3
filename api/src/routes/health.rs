use axum::Json;
use chrono::Utc;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
      "status": "healthy",
      "service": env!("CARGO_PKG_NAME"),
      "version": env!("CARGO_PKG_VERSION"),
      "timestamp": Utc::now().timestamp()
    }))
}
