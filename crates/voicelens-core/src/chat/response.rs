//! Response types for chat-completion operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token usage reported by the chat service.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,
    /// Tokens generated for the completion.
    pub completion_tokens: u32,
    /// Total tokens billed.
    pub total_tokens: u32,
}

/// Response from a chat completion: the first choice's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// The first returned choice's message content.
    pub content: String,
    /// Model that produced the completion, when reported.
    pub model: Option<String>,
    /// Token usage, when reported.
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Create a new chat response.
    pub fn new(request_id: Uuid, content: String) -> Self {
        Self {
            request_id,
            content,
            model: None,
            usage: None,
        }
    }

    /// Set the reporting model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the token usage.
    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }
}
