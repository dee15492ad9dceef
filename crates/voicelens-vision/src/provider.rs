//! [`OcrProvider`] implementation for the Read API client.

use std::time::Instant;

use voicelens_core::ocr::{OcrProvider, OcrRequest, OcrResponse};
use voicelens_core::{Error, Result, ServiceHealth};

use crate::client::VisionClient;
use crate::read::OperationStatus;
use crate::TRACING_TARGET_READ;

#[async_trait::async_trait]
impl OcrProvider for VisionClient {
    async fn extract_text(&self, request: OcrRequest) -> Result<OcrResponse> {
        let started = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET_READ,
            request_id = %request.request_id,
            image_bytes = ?request.byte_len(),
            "Extracting text from image"
        );

        let operation_url = self.submit(request.request_id, &request.source).await?;
        let operation = self
            .poll_until_terminal(request.request_id, &operation_url)
            .await?;

        match operation.status {
            OperationStatus::Succeeded => {
                let text = operation.concatenated_text();
                let line_count = operation.line_count();

                tracing::info!(
                    target: TRACING_TARGET_READ,
                    request_id = %request.request_id,
                    line_count,
                    text_len = text.len(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "Read operation succeeded"
                );

                Ok(OcrResponse::new(request.request_id, text, line_count)
                    .with_processing_time(started.elapsed()))
            }
            status => {
                let detail = operation
                    .error
                    .map(|error| error.to_string())
                    .unwrap_or_else(|| "no error detail reported".to_string());

                Err(Error::upstream_request_failed()
                    .with_message(format!("read operation ended {status:?}: {detail}")))
            }
        }
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        // The Read API has no dedicated health endpoint; a constructed
        // client with reachable configuration is considered healthy.
        Ok(ServiceHealth::healthy())
    }
}
