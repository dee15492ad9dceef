//! [`ChatProvider`] implementation for the Azure OpenAI client.

use voicelens_core::chat::{ChatProvider, ChatRequest, ChatResponse, Usage};
use voicelens_core::{Error, Result, ServiceHealth};

use crate::client::OpenAiClient;
use crate::completion::{CompletionRequest, CompletionResponse};
use crate::TRACING_TARGET_COMPLETION;

#[async_trait::async_trait]
impl ChatProvider for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let url = self.completions_url()?;
        let payload = CompletionRequest::from_messages(self.config(), request.messages);

        tracing::debug!(
            target: TRACING_TARGET_COMPLETION,
            request_id = %request.request_id,
            message_count = payload.messages.len(),
            "Sending chat completion"
        );

        let response = self
            .http()
            .post(url)
            .header("api-key", &self.config().api_key)
            .json(&payload)
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
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream_request_failed()
                .with_message(format!("chat completion failed: {status}: {body}")));
        }

        let completion: CompletionResponse = response.json().await.map_err(|err| {
            Error::serialization()
                .with_message("malformed completion payload")
                .with_source(err)
        })?;

        let content = completion.first_content().ok_or_else(|| {
            Error::upstream_request_failed().with_message("chat completion returned no choices")
        })?;

        tracing::info!(
            target: TRACING_TARGET_COMPLETION,
            request_id = %request.request_id,
            content_len = content.len(),
            model = completion.model.as_deref().unwrap_or("unknown"),
            "Chat completion succeeded"
        );

        let mut chat_response = ChatResponse::new(request.request_id, content.to_string());
        if let Some(model) = completion.model.clone() {
            chat_response = chat_response.with_model(model);
        }
        if let Some(usage) = completion.usage {
            chat_response = chat_response.with_usage(Usage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            });
        }

        Ok(chat_response)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        // No inexpensive health endpoint exists on the deployment; a
        // constructed client is considered healthy.
        Ok(ServiceHealth::healthy())
    }
}
