use crate::models::RootResponse;
use axum::Json;

/// Root route, a plain banner for anyone poking the server in a browser
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Cooking Assistant API Server".to_string(),
    })
}
