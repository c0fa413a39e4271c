use crate::models::{RecipeData, VoiceCommandResponse};
use axum::Json;
use serde_json::Value;
use tracing::info;

/// Handle a voice command from the mobile client.
///
/// Any JSON object is accepted; the `transcript` field is echoed back
/// verbatim whatever its type. Intent recognition and recipe lookup are
/// stubbed with a fixed payload for now.
pub async fn voice_command(Json(body): Json<Value>) -> Json<VoiceCommandResponse> {
    info!("Received voice command: {}", body);

    let received_command = body.get("transcript").cloned();

    Json(VoiceCommandResponse {
        success: true,
        message: "API is working!".to_string(),
        received_command,
        intent: "search_recipe".to_string(),
        data: RecipeData {
            recipe_title: "Test Pancakes".to_string(),
            ingredients: vec![
                "flour".to_string(),
                "eggs".to_string(),
                "milk".to_string(),
            ],
            instructions: vec![
                "Mix ingredients".to_string(),
                "Cook on pan".to_string(),
            ],
        },
    })
}
