//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig          # Host, port, timeouts
//! ├── pipeline: PipelineSettings    # Pipeline mode, audio encoding
//! ├── vision: VisionConfig          # Read API endpoint/key, polling
//! ├── openai: OpenAiConfig          # Chat deployment, sampling
//! └── speech: SpeechConfig          # Synthesis key/region/voice
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.

mod provider;
mod server;

use clap::Parser;
pub use provider::create_services;
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use voicelens_openai::OpenAiConfig;
use voicelens_server::PipelineSettings;
use voicelens_speech::SpeechConfig;
use voicelens_vision::VisionConfig;

use crate::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "voicelens")]
#[command(about = "voicelens OCR/proofread/synthesis server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// Pipeline mode and response encoding.
    #[clap(flatten)]
    pub pipeline: PipelineSettings,

    /// Read API configuration.
    #[clap(flatten)]
    pub vision: VisionConfig,

    /// Chat deployment configuration.
    #[clap(flatten)]
    pub openai: OpenAiConfig,

    /// Synthesis configuration.
    #[clap(flatten)]
    pub speech: SpeechConfig,
}

impl Cli {
    /// Loads environment variables from a `.env` file (when enabled) and
    /// parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from a `.env` file if the `dotenv`
    /// feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when the dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        use anyhow::Context;

        self.server
            .validate()
            .context("invalid server configuration")?;

        Ok(())
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        self.server.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            pipeline_mode = %self.pipeline.mode,
            base64_audio = self.pipeline.base64_audio,
            vision_endpoint = %self.vision.endpoint,
            vision_poll_max_wait_secs = self.vision.poll.max_wait_secs,
            openai_base = %self.openai.api_base,
            openai_engine = %self.openai.engine,
            speech_region = %self.speech.region,
            speech_voice = %self.speech.voice,
            "Pipeline configuration"
        );
    }
}
