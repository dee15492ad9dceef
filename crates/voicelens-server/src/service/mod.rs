//! Service state and pipeline settings.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use voicelens_core::Services;

/// Which subset of the pipeline runs for image input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "config", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PipelineMode {
    /// OCR, proofreading and synthesis.
    #[default]
    Full,
    /// OCR and synthesis, no proofreading.
    Recite,
    /// Chat passthrough only; image input is not processed.
    Relay,
}

/// Runtime settings for the request pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
pub struct PipelineSettings {
    /// Pipeline subset to run for image input.
    #[cfg_attr(
        feature = "config",
        arg(long = "pipeline-mode", env = "PIPELINE_MODE", default_value = "full")
    )]
    #[serde(default)]
    pub mode: PipelineMode,

    /// Return audio as a base64 text body instead of raw bytes.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "base64-audio",
            env = "BASE64_AUDIO",
            default_value = "true",
            action = clap::ArgAction::Set
        )
    )]
    #[serde(default = "default_base64_audio")]
    pub base64_audio: bool,
}

fn default_base64_audio() -> bool {
    true
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            mode: PipelineMode::default(),
            base64_audio: default_base64_audio(),
        }
    }
}

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct ServiceState {
    /// The remote-service providers behind the pipeline.
    pub services: Services,
    /// Runtime pipeline settings.
    pub settings: PipelineSettings,
}

impl ServiceState {
    /// Creates state from a service container and settings.
    pub fn new(services: Services, settings: PipelineSettings) -> Self {
        Self { services, settings }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn pipeline_mode_parses_lowercase_names() {
        assert_eq!(PipelineMode::from_str("full").unwrap(), PipelineMode::Full);
        assert_eq!(PipelineMode::from_str("recite").unwrap(), PipelineMode::Recite);
        assert_eq!(PipelineMode::from_str("relay").unwrap(), PipelineMode::Relay);
        assert!(PipelineMode::from_str("bogus").is_err());
    }

    #[test]
    fn full_pipeline_with_base64_audio_is_the_default() {
        let settings = PipelineSettings::default();
        assert_eq!(settings.mode, PipelineMode::Full);
        assert!(settings.base64_audio);
    }
}
