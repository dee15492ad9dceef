//! Service container for dependency injection.
//!
//! Holds the three remote-service providers the pipeline chains together,
//! so the HTTP layer depends on traits rather than concrete clients.

use crate::chat::BoxedChatProvider;
use crate::ocr::BoxedOcrProvider;
use crate::speech::BoxedSpeechProvider;

/// Container for the pipeline's remote services.
#[derive(Clone)]
pub struct Services {
    /// OCR service for text extraction from images.
    pub ocr: BoxedOcrProvider,
    /// Chat-completion service for proofreading and passthrough replies.
    pub chat: BoxedChatProvider,
    /// Speech service for audio synthesis.
    pub speech: BoxedSpeechProvider,
}

impl Services {
    /// Creates a new service container.
    pub fn new(ocr: BoxedOcrProvider, chat: BoxedChatProvider, speech: BoxedSpeechProvider) -> Self {
        Self { ocr, chat, speech }
    }
}
