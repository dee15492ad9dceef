//! Read API client implementation.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, ClientBuilder, StatusCode};
use url::Url;
use uuid::Uuid;

use voicelens_core::ocr::ImageSource;
use voicelens_core::{Error, Result};

use super::VisionConfig;
use crate::read::{ReadOperation, poll_operation};
use crate::{TRACING_TARGET_CLIENT, TRACING_TARGET_READ};

/// Path of the asynchronous read submission endpoint, relative to the
/// resource endpoint.
const ANALYZE_PATH: &str = "vision/v3.2/read/analyze";

/// Header carrying the subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Client for the Cognitive Services Read API.
///
/// Submitting an image yields an operation handle in the
/// `Operation-Location` response header; the client then polls that
/// handle until the operation reaches a terminal status.
#[derive(Debug, Clone)]
pub struct VisionClient {
    http: HttpClient,
    config: VisionConfig,
}

impl VisionClient {
    /// Creates a new Read API client from the given configuration.
    pub fn new(config: VisionConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint,
            "Creating vision client"
        );

        let http = ClientBuilder::new()
            .timeout(config.effective_timeout())
            .user_agent(config.effective_user_agent())
            .build()
            .map_err(|err| {
                Error::configuration()
                    .with_message("failed to build HTTP client")
                    .with_source(err)
            })?;

        Ok(Self { http, config })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Submits an image for recognition and returns the operation handle.
    pub async fn submit(&self, request_id: Uuid, source: &ImageSource) -> Result<Url> {
        let url = self.config.endpoint.join(ANALYZE_PATH).map_err(|err| {
            Error::configuration()
                .with_message("invalid analyze URL")
                .with_source(err)
        })?;

        let builder = self
            .http
            .post(url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key);

        let builder = match source {
            ImageSource::Bytes(bytes) => builder
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(bytes.clone()),
            ImageSource::Url(image_url) => {
                builder.json(&serde_json::json!({ "url": image_url.as_str() }))
            }
        };

        let response = builder.send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(submit_failure(status, body));
        }

        let operation_url = response
            .headers()
            .get("Operation-Location")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Url::parse(value).ok())
            .ok_or_else(|| {
                Error::upstream_request_failed()
                    .with_message("read submit response carried no Operation-Location header")
            })?;

        tracing::debug!(
            target: TRACING_TARGET_READ,
            request_id = %request_id,
            operation = %operation_url,
            "Read operation submitted"
        );

        Ok(operation_url)
    }

    /// Fetches the current snapshot of a read operation.
    pub async fn fetch(&self, operation_url: &Url) -> Result<ReadOperation> {
        let response = self
            .http
            .get(operation_url.clone())
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream_request_failed()
                .with_message(format!("read status query failed: {status}: {body}")));
        }

        response.json::<ReadOperation>().await.map_err(|err| {
            Error::serialization()
                .with_message("malformed read operation payload")
                .with_source(err)
        })
    }

    /// Polls a read operation until it reaches a terminal status.
    ///
    /// The status endpoint is queried at least once. While the operation
    /// reports `notStarted` or `running` the client sleeps according to
    /// the backoff schedule; an exhausted wait budget aborts the wait with
    /// [`voicelens_core::ErrorKind::UpstreamTimedOut`].
    pub async fn poll_until_terminal(
        &self,
        request_id: Uuid,
        operation_url: &Url,
    ) -> Result<ReadOperation> {
        let operation =
            poll_operation(&self.config.poll, || self.fetch(operation_url)).await?;

        tracing::debug!(
            target: TRACING_TARGET_READ,
            request_id = %request_id,
            status = ?operation.status,
            "Read operation reached terminal status"
        );

        Ok(operation)
    }
}

/// Maps a transport-level error onto the unified taxonomy.
fn request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::upstream_timed_out().with_source(err)
    } else {
        Error::upstream_request_failed().with_source(err)
    }
}

fn submit_failure(status: StatusCode, body: String) -> Error {
    Error::upstream_request_failed().with_message(format!("read submit failed: {status}: {body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds_with_defaults() {
        let config = VisionConfig::new("https://example.com/".parse().unwrap(), "key");
        let client = VisionClient::new(config).unwrap();
        assert_eq!(client.config().api_key, "key");
    }

    #[test]
    fn analyze_path_joins_onto_the_endpoint() {
        let endpoint: Url = "https://res.cognitiveservices.azure.com/".parse().unwrap();
        let url = endpoint.join(ANALYZE_PATH).unwrap();
        assert_eq!(
            url.as_str(),
            "https://res.cognitiveservices.azure.com/vision/v3.2/read/analyze"
        );
    }
}
