//! [`SpeechProvider`] implementation for the synthesis client.

use voicelens_core::speech::{SpeechProvider, SpeechRequest, SpeechResponse};
use voicelens_core::{Result, ServiceHealth};

use crate::TRACING_TARGET_SYNTHESIS;
use crate::client::SpeechClient;

#[async_trait::async_trait]
impl SpeechProvider for SpeechClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse> {
        tracing::debug!(
            target: TRACING_TARGET_SYNTHESIS,
            request_id = %request.request_id,
            character_count = request.character_count(),
            "Synthesizing speech"
        );

        let result = self.synthesize_text(&request.text).await?;
        result.into_speech_response(request.request_id)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        // The regional endpoint exposes no unauthenticated health route;
        // a constructed client is considered healthy.
        Ok(ServiceHealth::healthy())
    }
}
