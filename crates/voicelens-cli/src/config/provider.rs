//! Service provider construction.

use std::sync::Arc;

use anyhow::Context;
use voicelens_core::Services;
use voicelens_openai::OpenAiClient;
use voicelens_speech::SpeechClient;
use voicelens_vision::VisionClient;

use super::Cli;

/// Creates the remote service clients from CLI configuration.
///
/// # Errors
///
/// Returns an error if any client cannot be initialized.
pub fn create_services(cli: &Cli) -> anyhow::Result<Services> {
    let vision =
        VisionClient::new(cli.vision.clone()).context("failed to create vision client")?;
    let openai =
        OpenAiClient::new(cli.openai.clone()).context("failed to create chat client")?;
    let speech =
        SpeechClient::new(cli.speech.clone()).context("failed to create speech client")?;

    Ok(Services::new(
        Arc::new(vision),
        Arc::new(openai),
        Arc::new(speech),
    ))
}
