//! Completion request payload.

use serde::Serialize;

use voicelens_core::chat::ChatMessage;

use crate::client::OpenAiConfig;

/// Request body for the chat-completions endpoint.
///
/// The domain [`ChatMessage`] serializes directly to the wire shape
/// (`{"role": "...", "content": "..."}`), so the conversation is embedded
/// as-is. Sampling parameters come from the client configuration.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// The conversation, in order.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Nucleus sampling parameter.
    pub top_p: f32,
    /// Frequency penalty.
    pub frequency_penalty: f32,
    /// Presence penalty.
    pub presence_penalty: f32,
    /// Stop sequences; never set by this service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl CompletionRequest {
    /// Builds a request for the given conversation using the
    /// configuration's sampling parameters.
    pub fn from_messages(config: &OpenAiConfig, messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
            frequency_penalty: config.frequency_penalty,
            presence_penalty: config.presence_penalty,
            stop: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voicelens_core::chat::ChatRequest;

    #[test]
    fn serializes_to_the_wire_shape() {
        let config = OpenAiConfig::new(
            "https://res.openai.azure.com/".parse().unwrap(),
            "key",
            "gpt",
        );
        let chat = ChatRequest::proofread("text");
        let request = CompletionRequest::from_messages(&config, chat.messages);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "text");
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        assert_eq!(value["max_tokens"], 500);
        assert!(value.get("stop").is_none());
    }
}
