//! Azure OpenAI client implementation.

use reqwest::{Client as HttpClient, ClientBuilder};
use url::Url;

use voicelens_core::{Error, Result};

use super::OpenAiConfig;
use crate::TRACING_TARGET_CLIENT;

/// Client for an Azure OpenAI chat-completion deployment.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: HttpClient,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Creates a new chat client from the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            api_base = %config.api_base,
            engine = %config.engine,
            api_version = %config.api_version,
            "Creating chat client"
        );

        let http = ClientBuilder::new()
            .timeout(config.effective_timeout())
            .user_agent(format!("voicelens-openai/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| {
                Error::configuration()
                    .with_message("failed to build HTTP client")
                    .with_source(err)
            })?;

        Ok(Self { http, config })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Gets the underlying HTTP client.
    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    /// URL of the chat-completions endpoint for the configured deployment.
    pub fn completions_url(&self) -> Result<Url> {
        let path = format!(
            "openai/deployments/{}/chat/completions",
            self.config.engine
        );
        let mut url = self.config.api_base.join(&path).map_err(|err| {
            Error::configuration()
                .with_message("invalid completions URL")
                .with_source(err)
        })?;
        url.set_query(Some(&format!("api-version={}", self.config.api_version)));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url_targets_the_deployment() {
        let config = OpenAiConfig::new(
            "https://res.openai.azure.com/".parse().unwrap(),
            "key",
            "gpt-35-turbo",
        );
        let client = OpenAiClient::new(config).unwrap();

        assert_eq!(
            client.completions_url().unwrap().as_str(),
            "https://res.openai.azure.com/openai/deployments/gpt-35-turbo/chat/completions?api-version=2023-07-01-preview"
        );
    }
}
