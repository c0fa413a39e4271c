use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for a transcription request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TranscribeResponse {
    pub transcribed_text: String,
}
