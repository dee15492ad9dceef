//! Mock implementations of the pipeline services for testing.
//!
//! This module provides a unified mock provider that implements all three
//! provider traits. The mocks return configured canned values and are
//! useful for unit and integration testing without remote credentials.
//!
//! # Feature Flag
//!
//! Only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! voicelens-core = { version = "...", features = ["test-utils"] }
//! ```

use std::sync::Arc;

use crate::chat::{ChatProvider, ChatRequest, ChatResponse};
use crate::ocr::{OcrProvider, OcrRequest, OcrResponse};
use crate::speech::{SpeechProvider, SpeechRequest, SpeechResponse};
use crate::{Result, ServiceHealth, Services};

/// Configuration for the mock provider.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Text returned for OCR requests. `Some("")` simulates a successful
    /// read that detected no text.
    pub mock_text: Option<String>,
    /// Reply returned for chat requests; defaults to echoing the last
    /// user message.
    pub mock_reply: Option<String>,
    /// Audio bytes returned for synthesis requests.
    pub mock_audio: Option<Vec<u8>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            mock_text: Some("mock ocr text".to_string()),
            mock_reply: None,
            mock_audio: None,
        }
    }
}

impl MockConfig {
    /// Convert this configuration into a complete set of services.
    pub fn into_services(self) -> Services {
        MockProvider::new(self).into_services()
    }
}

/// Unified mock provider for testing.
///
/// Implements [`OcrProvider`], [`ChatProvider`] and [`SpeechProvider`],
/// returning the configured canned values.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    config: MockConfig,
}

impl MockProvider {
    /// Creates a mock provider with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Wraps this provider into a [`Services`] container, sharing one
    /// instance across all three slots.
    pub fn into_services(self) -> Services {
        let provider = Arc::new(self);
        Services::new(provider.clone(), provider.clone(), provider)
    }
}

#[async_trait::async_trait]
impl OcrProvider for MockProvider {
    async fn extract_text(&self, request: OcrRequest) -> Result<OcrResponse> {
        let text = self.config.mock_text.clone().unwrap_or_default();
        let line_count = usize::from(!text.is_empty());
        Ok(OcrResponse::new(request.request_id, text, line_count))
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

#[async_trait::async_trait]
impl ChatProvider for MockProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let content = match &self.config.mock_reply {
            Some(reply) => reply.clone(),
            None => request.last_user_content().unwrap_or_default().to_string(),
        };
        Ok(ChatResponse::new(request.request_id, content).with_model("mock"))
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

#[async_trait::async_trait]
impl SpeechProvider for MockProvider {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse> {
        let audio = self
            .config
            .mock_audio
            .clone()
            .unwrap_or_else(|| b"mock-audio".to_vec());
        Ok(SpeechResponse::new(request.request_id, audio, "audio/mpeg"))
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn chat_mock_echoes_without_configured_reply() {
        let provider = MockProvider::default();
        let response = provider
            .complete(ChatRequest::proofread("Hello"))
            .await
            .unwrap();
        assert_eq!(response.content, "Hello");
    }

    #[tokio::test]
    async fn chat_mock_returns_configured_reply() {
        let provider = MockProvider::new(MockConfig {
            mock_reply: Some("Bonjour".to_string()),
            ..Default::default()
        });
        let response = provider
            .complete(ChatRequest::proofread("Hello"))
            .await
            .unwrap();
        assert_eq!(response.content, "Bonjour");
    }

    #[tokio::test]
    async fn ocr_mock_reports_empty_reads() {
        let provider = MockProvider::new(MockConfig {
            mock_text: Some(String::new()),
            ..Default::default()
        });
        let response = provider
            .extract_text(OcrRequest::from_bytes(vec![0xFF, 0xD8]))
            .await
            .unwrap();
        assert!(!response.has_text());
        assert_eq!(response.line_count, 0);
    }
}
