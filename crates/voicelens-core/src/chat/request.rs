//! Request types for chat-completion operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PROOFREAD_SYSTEM_PROMPT;

/// Role of a chat message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction.
    System,
    /// End-user input.
    User,
    /// Model output.
    Assistant,
}

/// A single message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request for a single chat completion.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Unique identifier for this request, threaded through tracing.
    pub request_id: Uuid,
    /// The conversation to complete, in order.
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Creates a request from a pre-built message list.
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            messages,
        }
    }

    /// Creates the fixed proofreading conversation around the given text.
    pub fn proofread(text: impl Into<String>) -> Self {
        Self::from_messages(vec![
            ChatMessage::system(PROOFREAD_SYSTEM_PROMPT),
            ChatMessage::user(text),
        ])
    }

    /// Content of the last user message, if any.
    pub fn last_user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == Role::User)
            .map(|message| message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proofread_prefixes_system_prompt() {
        let request = ChatRequest::proofread("OCR text");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, PROOFREAD_SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "OCR text");
    }

    #[test]
    fn last_user_content_skips_assistant_turns() {
        let request = ChatRequest::from_messages(vec![
            ChatMessage::user("first"),
            ChatMessage::assistant("reply"),
            ChatMessage::user("second"),
        ]);
        assert_eq!(request.last_user_content(), Some("second"));
    }
}
