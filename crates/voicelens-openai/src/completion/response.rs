//! Completion response payload.

use serde::Deserialize;

/// Response body from the chat-completions endpoint, reduced to the
/// fields the pipeline consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Model that produced the completion, when reported.
    #[serde(default)]
    pub model: Option<String>,
    /// Returned choices; the pipeline only ever reads the first.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Token accounting, when reported.
    #[serde(default)]
    pub usage: Option<WireUsage>,
}

impl CompletionResponse {
    /// Content of the first choice's message, if present.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChoiceMessage,
    /// Why generation stopped, when reported.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message inside a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Author role as reported by the service.
    #[serde(default)]
    pub role: Option<String>,
    /// Generated text; may be absent on filtered completions.
    #[serde(default)]
    pub content: Option<String>,
}

/// Token accounting as reported by the service.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WireUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_content_reads_the_first_choice() {
        let response: CompletionResponse = serde_json::from_value(serde_json::json!({
            "model": "gpt-35-turbo",
            "choices": [
                {"message": {"role": "assistant", "content": "Bonjour"}, "finish_reason": "stop"},
                {"message": {"role": "assistant", "content": "Salut"}}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }))
        .unwrap();

        assert_eq!(response.first_content(), Some("Bonjour"));
        assert_eq!(response.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn empty_choice_list_has_no_content() {
        let response: CompletionResponse =
            serde_json::from_value(serde_json::json!({"choices": []})).unwrap();
        assert!(response.first_content().is_none());
    }
}
