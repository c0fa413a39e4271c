use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Documented shape of a voice command request.
///
/// The handler itself accepts any JSON object and echoes whatever
/// `transcript` holds, so this type only backs the OpenAPI schema.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct VoiceCommandRequest {
    /// Transcript of the spoken command
    pub transcript: Option<String>,
}

/// Response for a voice command
#[derive(Serialize, Deserialize, ToSchema)]
pub struct VoiceCommandResponse {
    pub success: bool,
    pub message: String,
    /// Echo of the inbound `transcript` field, omitted when it was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub received_command: Option<Value>,
    pub intent: String,
    pub data: RecipeData,
}

/// Recipe payload attached to a voice command response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RecipeData {
    pub recipe_title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
