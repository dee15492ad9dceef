//! Synthesis client configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Default timeout for a synthesis request: 30 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default synthesis voice.
pub const DEFAULT_VOICE: &str = "ja-JP-KeitaNeural";

/// Default audio output format.
pub const DEFAULT_OUTPUT_FORMAT: &str = "audio-16khz-128kbitrate-mono-mp3";

/// Configuration for the synthesis client.
///
/// The `MULTI_SERVICE_*` environment names are shared with the vision
/// client: one Cognitive Services resource backs both recognition and
/// synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct SpeechConfig {
    /// Subscription key for the Cognitive Services resource.
    #[cfg_attr(
        feature = "config",
        arg(long = "speech-key", env = "MULTI_SERVICE_KEY", hide_env_values = true)
    )]
    pub api_key: String,

    /// Azure region of the speech resource, e.g. `japaneast`.
    #[cfg_attr(feature = "config", arg(long = "speech-region", env = "MULTI_SERVICE_REGION"))]
    pub region: String,

    /// Synthesis voice name.
    #[cfg_attr(
        feature = "config",
        arg(long = "speech-voice", env = "SPEECH_VOICE", default_value = DEFAULT_VOICE)
    )]
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Audio output format identifier.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "speech-output-format",
            env = "SPEECH_OUTPUT_FORMAT",
            default_value = DEFAULT_OUTPUT_FORMAT
        )
    )]
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// HTTP request timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "speech-timeout", env = "SPEECH_TIMEOUT", default_value = "30")
    )]
    #[serde(default = "default_timeout_secs")]
    pub http_timeout: u64,
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_output_format() -> String {
    DEFAULT_OUTPUT_FORMAT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl SpeechConfig {
    /// Creates a configuration for the given key and region.
    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            region: region.into(),
            voice: default_voice(),
            output_format: default_output_format(),
            http_timeout: default_timeout_secs(),
        }
    }

    /// Returns the regional synthesis endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.region
        )
    }

    /// Returns the effective timeout, using the default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.http_timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.http_timeout)
        }
    }

    /// Set the voice name.
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_regional() {
        let config = SpeechConfig::new("key", "japaneast");
        assert_eq!(
            config.endpoint(),
            "https://japaneast.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }

    #[test]
    fn voice_and_format_defaults() {
        let config = SpeechConfig::new("key", "japaneast");
        assert_eq!(config.voice, "ja-JP-KeitaNeural");
        assert_eq!(config.output_format, "audio-16khz-128kbitrate-mono-mp3");
    }
}
