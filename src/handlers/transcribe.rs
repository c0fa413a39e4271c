use crate::models::{ErrorResponse, TranscribeResponse};
use axum::{extract::Multipart, http::StatusCode, Json};
use tracing::{debug, error};

/// Transcribe an uploaded audio clip.
///
/// Accepts a multipart upload with a `file` part. The audio bytes are read
/// and discarded; a real ASR model would run here, so the transcript is a
/// fixed sample for now.
pub async fn transcribe(
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut audio_len: Option<usize> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        if field.name() == Some("file") {
            let data = field.bytes().await.map_err(bad_request)?;
            audio_len = Some(data.len());
        }
    }

    match audio_len {
        Some(len) => {
            debug!("Received {} bytes of audio", len);
            Ok(Json(TranscribeResponse {
                transcribed_text: "Hello, this is a sample transcription.".to_string(),
            }))
        }
        None => {
            error!("Transcription request without a 'file' part");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    code: StatusCode::BAD_REQUEST.as_u16(),
                    status: "error".to_string(),
                    error: "Missing 'file' part in multipart upload".to_string(),
                }),
            ))
        }
    }
}

fn bad_request(e: axum::extract::multipart::MultipartError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            code: StatusCode::BAD_REQUEST.as_u16(),
            status: "error".to_string(),
            error: e.to_string(),
        }),
    )
}
