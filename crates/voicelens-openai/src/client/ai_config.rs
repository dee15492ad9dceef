//! Azure OpenAI client configuration.
//!
//! Sampling defaults are fixed for the proofreading workload; every
//! completion is sent with the same parameters.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default timeout for a completion request: 60 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default API version understood by the deployment.
pub const DEFAULT_API_VERSION: &str = "2023-07-01-preview";

/// Configuration for the Azure OpenAI chat client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct OpenAiConfig {
    /// Base endpoint of the Azure OpenAI resource.
    #[cfg_attr(feature = "config", arg(long = "openai-base", env = "OPENAI_API_BASE"))]
    pub api_base: Url,

    /// API key for the Azure OpenAI resource.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-key", env = "OPENAI_API_KEY", hide_env_values = true)
    )]
    pub api_key: String,

    /// Deployment (engine) name that serves the completions.
    #[cfg_attr(feature = "config", arg(long = "openai-engine", env = "OPENAI_API_ENGINE"))]
    pub engine: String,

    /// API version query parameter.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "openai-api-version",
            env = "OPENAI_API_VERSION",
            default_value = DEFAULT_API_VERSION
        )
    )]
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// HTTP request timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-timeout", env = "OPENAI_TIMEOUT", default_value = "60")
    )]
    #[serde(default = "default_timeout_secs")]
    pub http_timeout: u64,

    /// Sampling temperature.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-temperature", env = "OPENAI_TEMPERATURE", default_value = "0.7")
    )]
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate per completion.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value = "500")
    )]
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Nucleus sampling parameter.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-top-p", env = "OPENAI_TOP_P", default_value = "0.95")
    )]
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Frequency penalty.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "openai-frequency-penalty",
            env = "OPENAI_FREQUENCY_PENALTY",
            default_value = "0.0"
        )
    )]
    #[serde(default)]
    pub frequency_penalty: f32,

    /// Presence penalty.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "openai-presence-penalty",
            env = "OPENAI_PRESENCE_PENALTY",
            default_value = "0.0"
        )
    )]
    #[serde(default)]
    pub presence_penalty: f32,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    500
}

fn default_top_p() -> f32 {
    0.95
}

impl OpenAiConfig {
    /// Creates a configuration for the given resource, key and deployment.
    pub fn new(api_base: Url, api_key: impl Into<String>, engine: impl Into<String>) -> Self {
        Self {
            api_base,
            api_key: api_key.into(),
            engine: engine.into(),
            api_version: default_api_version(),
            http_timeout: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }

    /// Returns the effective timeout, using the default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.http_timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.http_timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_defaults_are_fixed() {
        let config = OpenAiConfig::new("https://example.openai.azure.com/".parse().unwrap(), "k", "gpt");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.top_p, 0.95);
        assert_eq!(config.frequency_penalty, 0.0);
        assert_eq!(config.presence_penalty, 0.0);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
    }
}
