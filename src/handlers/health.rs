use crate::models::HealthResponse;
use axum::Json;
use tracing::debug;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Cooking Assistant API is running!".to_string(),
    })
}

/// Readiness check endpoint
pub async fn ready_check() -> Json<HealthResponse> {
    debug!("Readiness check requested");
    // The service has no external dependencies to probe; once the
    // listener is up it is ready.
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Service is ready".to_string(),
    })
}
