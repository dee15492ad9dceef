//! Request types for speech synthesis.

use uuid::Uuid;

/// Request for a single synthesis operation.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Unique identifier for this request, threaded through tracing.
    pub request_id: Uuid,
    /// The text to speak.
    pub text: String,
}

impl SpeechRequest {
    /// Creates a synthesis request for the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            text: text.into(),
        }
    }

    /// Number of characters to be synthesized.
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }
}
