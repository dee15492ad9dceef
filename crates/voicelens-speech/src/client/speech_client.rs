//! Synthesis client implementation.

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, ClientBuilder};

use voicelens_core::{Error, Result};

use super::SpeechConfig;
use crate::synthesis::{SynthesisResult, build_ssml};
use crate::{TRACING_TARGET_CLIENT, TRACING_TARGET_SYNTHESIS};

/// Header carrying the subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header selecting the audio output format.
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

/// Client for the Cognitive Services synthesis REST endpoint.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    http: HttpClient,
    config: SpeechConfig,
}

impl SpeechClient {
    /// Creates a new synthesis client from the given configuration.
    pub fn new(config: SpeechConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            region = %config.region,
            voice = %config.voice,
            "Creating speech client"
        );

        let http = ClientBuilder::new()
            .timeout(config.effective_timeout())
            .build()
            .map_err(|err| {
                Error::configuration()
                    .with_message("failed to build HTTP client")
                    .with_source(err)
            })?;

        Ok(Self { http, config })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }

    /// Synthesizes the given text and returns the terminal result.
    ///
    /// A non-success response is the REST surface of the SDK's canceled
    /// result reason; it is returned as a [`SynthesisResult::canceled`]
    /// carrying the status as the reason and the body as the detail.
    pub async fn synthesize_text(&self, text: &str) -> Result<SynthesisResult> {
        let ssml = build_ssml(&self.config.voice, text);

        let response = self
            .http
            .post(self.config.endpoint())
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .header(CONTENT_TYPE, "application/ssml+xml")
            .header(OUTPUT_FORMAT_HEADER, &self.config.output_format)
            .header(
                USER_AGENT,
                format!("voicelens-speech/{}", env!("CARGO_PKG_VERSION")),
            )
            .body(ssml)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    Error::upstream_timed_out().with_source(err)
                } else {
                    Error::upstream_request_failed().with_source(err)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(
                target: TRACING_TARGET_SYNTHESIS,
                status = status.as_u16(),
                "Synthesis canceled by the service"
            );
            return Ok(SynthesisResult::canceled(
                format!("Error ({status})"),
                detail,
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response
            .bytes()
            .await
            .map_err(|err| {
                Error::upstream_request_failed()
                    .with_message("failed to read synthesized audio")
                    .with_source(err)
            })?
            .to_vec();

        tracing::debug!(
            target: TRACING_TARGET_SYNTHESIS,
            audio_len = audio.len(),
            content_type = %content_type,
            "Synthesis completed"
        );

        Ok(SynthesisResult::completed(audio, content_type))
    }
}
