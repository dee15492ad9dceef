//! The voicelens route handler.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::Response;
use voicelens_core::Error as CoreError;

use crate::error::Result;
use crate::handler::request::VoicelensParams;
use crate::handler::response;
use crate::pipeline::{self, ImageOutcome};
use crate::service::{PipelineMode, ServiceState};

/// Tracing target for the voicelens handler.
const TRACING_TARGET: &str = "voicelens_server::handler::voicelens";

/// Handles `POST /voicelens`.
///
/// Input comes from query parameters or a JSON body (query wins). With no
/// input the handler answers with the static informational message; a
/// message runs the chat passthrough; an image runs the configured
/// pipeline subset. A malformed JSON body on a non-empty request is a
/// client error rather than being silently ignored.
pub async fn voicelens(
    State(state): State<ServiceState>,
    Query(query): Query<VoicelensParams>,
    body: Bytes,
) -> Result<Response> {
    tracing::debug!(target: TRACING_TARGET, body_len = body.len(), "Processing request");

    let body_params = parse_body(&body)?;
    let params = VoicelensParams::merged(query, body_params);

    if params.is_empty() {
        return Ok(response::informational());
    }

    let mode = state.settings.mode;
    let image_source = params.image_source()?;

    if let Some(source) = image_source {
        if mode != PipelineMode::Relay {
            let outcome = pipeline::run_image(&state.services, mode, source).await?;
            return Ok(match outcome {
                ImageOutcome::Audio(speech) => {
                    response::audio(speech, state.settings.base64_audio)
                }
                ImageOutcome::NoText => response::informational(),
            });
        }

        tracing::debug!(
            target: TRACING_TARGET,
            "Relay mode ignores image input"
        );
    }

    match params.message() {
        Some(message) => {
            let content = pipeline::run_message(&state.services, message).await?;
            Ok(response::text(content))
        }
        None => Ok(response::informational()),
    }
}

/// Parses the request body as JSON parameters.
///
/// An empty body is simply "no body"; a non-empty body that is not valid
/// JSON is rejected.
fn parse_body(body: &Bytes) -> Result<Option<VoicelensParams>> {
    if body.is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(|err| {
            CoreError::serialization()
                .with_message("request body is not valid JSON")
                .with_source(err)
                .into()
        })
}
