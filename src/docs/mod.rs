use crate::models::*;
use utoipa::OpenApi;

/// Root banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server banner", body = RootResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/api/ready",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

/// Handle a voice command
#[utoipa::path(
    post,
    path = "/api/voice-command",
    request_body = VoiceCommandRequest,
    responses(
        (status = 200, description = "Command accepted", body = VoiceCommandResponse),
        (status = 400, description = "Malformed JSON body")
    )
)]
#[allow(dead_code)]
pub async fn voice_command_doc() {}

/// Transcribe an uploaded audio clip
#[utoipa::path(
    post,
    path = "/api/transcribe",
    responses(
        (status = 200, description = "Transcription produced", body = TranscribeResponse),
        (status = 400, description = "Missing file part", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn transcribe_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        health_check_doc,
        ready_check_doc,
        voice_command_doc,
        transcribe_doc,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            VoiceCommandRequest,
            VoiceCommandResponse,
            RecipeData,
            TranscribeResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "api", description = "Cooking assistant API endpoints")
    )
)]
pub struct ApiDoc;
