//! Pipeline orchestration.
//!
//! These functions chain the remote services for one request. The chat
//! passthrough is shared by every mode; image handling runs the subset
//! selected by [`PipelineMode`](crate::service::PipelineMode).

use voicelens_core::chat::ChatRequest;
use voicelens_core::ocr::{ImageSource, OcrRequest};
use voicelens_core::speech::{SpeechRequest, SpeechResponse};
use voicelens_core::{Result, Services};

use crate::service::PipelineMode;

/// Tracing target for pipeline orchestration.
pub const TRACING_TARGET: &str = "voicelens_server::pipeline";

/// Outcome of the image pipeline.
#[derive(Debug)]
pub enum ImageOutcome {
    /// Synthesis produced audio for the recognized (and possibly
    /// proofread) text.
    Audio(SpeechResponse),
    /// The read operation succeeded but recognized no text.
    ///
    /// Kept distinct from an OCR failure: a failure propagates as an
    /// error, an empty read falls back to the informational response.
    NoText,
}

/// Runs the chat passthrough for a user-supplied message.
pub async fn run_message(services: &Services, message: &str) -> Result<String> {
    let request = ChatRequest::proofread(message);
    let request_id = request.request_id;

    tracing::debug!(
        target: TRACING_TARGET,
        request_id = %request_id,
        "Running chat passthrough"
    );

    let response = services.chat.complete(request).await?;
    Ok(response.content)
}

/// Runs the configured image pipeline subset.
pub async fn run_image(
    services: &Services,
    mode: PipelineMode,
    source: ImageSource,
) -> Result<ImageOutcome> {
    let ocr_request = OcrRequest::from_source(source);
    let request_id = ocr_request.request_id;

    tracing::debug!(
        target: TRACING_TARGET,
        request_id = %request_id,
        mode = %mode,
        "Running image pipeline"
    );

    let ocr_response = services.ocr.extract_text(ocr_request).await?;
    if !ocr_response.has_text() {
        tracing::info!(
            target: TRACING_TARGET,
            request_id = %request_id,
            "Read succeeded without detecting text"
        );
        return Ok(ImageOutcome::NoText);
    }

    let speakable = match mode {
        PipelineMode::Full => {
            let chat_response = services
                .chat
                .complete(ChatRequest::proofread(ocr_response.text))
                .await?;
            chat_response.content
        }
        PipelineMode::Recite => ocr_response.text,
        // The handler never routes image input here.
        PipelineMode::Relay => return Ok(ImageOutcome::NoText),
    };

    let speech_response = services
        .speech
        .synthesize(SpeechRequest::new(speakable))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        request_id = %request_id,
        audio_len = speech_response.audio.len(),
        "Image pipeline produced audio"
    );

    Ok(ImageOutcome::Audio(speech_response))
}

#[cfg(test)]
mod tests {
    use voicelens_core::mock::{MockConfig, MockProvider};

    use super::*;

    fn services(config: MockConfig) -> Services {
        MockProvider::new(config).into_services()
    }

    #[tokio::test]
    async fn message_passthrough_returns_chat_content() {
        let services = services(MockConfig {
            mock_reply: Some("Bonjour".to_string()),
            ..Default::default()
        });

        let content = run_message(&services, "Hello").await.unwrap();
        assert_eq!(content, "Bonjour");
    }

    #[tokio::test]
    async fn full_mode_speaks_the_proofread_text() {
        let services = services(MockConfig {
            mock_text: Some("raw ocr".to_string()),
            mock_audio: Some(b"AUDIO".to_vec()),
            ..Default::default()
        });

        let outcome = run_image(
            &services,
            PipelineMode::Full,
            ImageSource::Bytes(vec![0xFF, 0xD8]),
        )
        .await
        .unwrap();

        match outcome {
            ImageOutcome::Audio(speech) => assert_eq!(speech.audio, b"AUDIO"),
            ImageOutcome::NoText => panic!("expected audio"),
        }
    }

    #[tokio::test]
    async fn empty_read_yields_no_text() {
        let services = services(MockConfig {
            mock_text: Some(String::new()),
            ..Default::default()
        });

        let outcome = run_image(
            &services,
            PipelineMode::Recite,
            ImageSource::Bytes(vec![0xFF, 0xD8]),
        )
        .await
        .unwrap();

        assert!(matches!(outcome, ImageOutcome::NoText));
    }
}
