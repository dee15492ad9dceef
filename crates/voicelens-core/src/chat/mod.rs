//! Chat-completion abstractions.
//!
//! The pipeline uses a single fixed conversation shape: a proofreading
//! system instruction followed by the OCR text (or a user-supplied
//! message). Providers return the first choice's content.

use std::sync::Arc;

pub mod request;
pub mod response;

pub use request::{ChatMessage, ChatRequest, Role};
pub use response::{ChatResponse, Usage};

use crate::ServiceHealth;
pub use crate::{Error, ErrorKind, Result};

/// Type alias for a shared, dynamically dispatched chat provider.
pub type BoxedChatProvider = Arc<dyn ChatProvider + Send + Sync>;

/// Tracing target for chat operations.
pub const TRACING_TARGET: &str = "voicelens_core::chat";

/// Fixed system instruction for proofreading OCR output.
///
/// The model is told to repair recognition artifacts so the text can be
/// read aloud, without touching any numerical values.
pub const PROOFREAD_SYSTEM_PROMPT: &str = "Below is text read by OCR. Check the content and make \
sure the text is appropriate. If it is not correct, complete it so that it can be read out loud. \
Do not change the numerical values in the sentences.";

/// Core trait for chat-completion operations.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the conversation and returns the first choice's content.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Performs a health check on the chat service.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
