use crate::config::Config;
use crate::handlers::{health_check, ready_check, root, transcribe, voice_command};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create API routes
pub fn create_api_routes() -> Router {
    Router::new()
        .route("/voice-command", post(voice_command))
        .route("/transcribe", post(transcribe))
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
}

/// Assemble the application router: root banner, `/api` routes, and the
/// CORS policy derived from the configuration.
pub fn create_app(config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", create_api_routes())
        .layer(config.cors_layer())
        .layer(TraceLayer::new_for_http())
}
