//! Synthesis client and configuration.

mod speech_client;
mod speech_config;

pub use speech_client::SpeechClient;
pub use speech_config::SpeechConfig;
