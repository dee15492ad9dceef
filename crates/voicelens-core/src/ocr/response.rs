//! Response types for OCR operations.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response from an OCR operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResponse {
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// Extracted text: every recognized line concatenated in block order
    /// then line order, exactly as the service returned them.
    pub text: String,
    /// Number of recognized lines across all text blocks.
    pub line_count: usize,
    /// Wall-clock time the operation took, including polling.
    pub processing_time: Option<Duration>,
}

impl OcrResponse {
    /// Create a new OCR response.
    pub fn new(request_id: Uuid, text: String, line_count: usize) -> Self {
        Self {
            request_id,
            text,
            line_count,
            processing_time: None,
        }
    }

    /// Set the processing time.
    pub fn with_processing_time(mut self, elapsed: Duration) -> Self {
        self.processing_time = Some(elapsed);
        self
    }

    /// Check if any text was extracted.
    ///
    /// A successful operation with no text is not an error; callers decide
    /// what an empty result means for them.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_a_success_without_text() {
        let response = OcrResponse::new(Uuid::new_v4(), String::new(), 0);
        assert!(!response.has_text());
    }

    #[test]
    fn whitespace_only_counts_as_no_text() {
        let response = OcrResponse::new(Uuid::new_v4(), "  \n ".to_string(), 1);
        assert!(!response.has_text());
    }
}
