//! Health check endpoint

use actix_web::HttpResponse;
use tracing::debug;

/// Basic health check, open to load balancers and monitoring
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
    }))
}
