//! Optical Character Recognition (OCR) abstractions.
//!
//! This module provides the trait and types for extracting text from an
//! image via an asynchronous remote read operation. Implementations submit
//! the image, poll the returned operation handle until a terminal status,
//! and return the recognized lines concatenated in service order.

use std::sync::Arc;

pub mod request;
pub mod response;

pub use request::{ImageSource, OcrRequest};
pub use response::OcrResponse;

use crate::ServiceHealth;
pub use crate::{Error, ErrorKind, Result};

/// Type alias for a shared, dynamically dispatched OCR provider.
pub type BoxedOcrProvider = Arc<dyn OcrProvider + Send + Sync>;

/// Tracing target for OCR operations.
pub const TRACING_TARGET: &str = "voicelens_core::ocr";

/// Core trait for OCR operations.
///
/// An empty `text` in a successful response means the operation completed
/// without detecting any text; remote failures are reported as errors.
/// The two cases are deliberately kept distinguishable.
#[async_trait::async_trait]
pub trait OcrProvider: Send + Sync {
    /// Extracts text from the image referenced by the request.
    async fn extract_text(&self, request: OcrRequest) -> Result<OcrResponse>;

    /// Performs a health check on the OCR service.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
