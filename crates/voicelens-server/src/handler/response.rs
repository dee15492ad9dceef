//! Response construction for the voicelens route.

use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use voicelens_core::speech::SpeechResponse;

/// Informational body returned when a request carries no usable input,
/// or when recognition finds no text. Callers depend on this exact
/// wording.
pub const DEFAULT_OK_MESSAGE: &str = "This HTTP triggered function executed successfully.";

/// Error payload returned for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error kind, e.g. `upstream_timed_out`.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

/// The static informational 200 response.
pub fn informational() -> Response {
    DEFAULT_OK_MESSAGE.into_response()
}

/// A plain-text 200 response with the given content.
pub fn text(content: String) -> Response {
    content.into_response()
}

/// An audio 200 response: raw bytes with the synthesis content type, or
/// a base64 text body when `base64_audio` is set.
pub fn audio(speech: SpeechResponse, base64_audio: bool) -> Response {
    if base64_audio {
        speech.audio_base64().into_response()
    } else {
        ([(CONTENT_TYPE, speech.content_type.clone())], speech.audio).into_response()
    }
}
