//! Request types for OCR operations.

use url::Url;
use uuid::Uuid;

/// The image to run recognition on.
///
/// Base64 decoding happens at the HTTP boundary; providers only ever see
/// raw bytes or a URL the remote service can fetch itself.
#[derive(Clone)]
pub enum ImageSource {
    /// Raw image bytes, submitted as the request body.
    Bytes(Vec<u8>),
    /// A publicly reachable image URL, submitted by reference.
    Url(Url),
}

impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Url(url) => f.debug_tuple("Url").field(&url.as_str()).finish(),
        }
    }
}

/// Request for a single OCR extraction.
#[derive(Debug, Clone)]
pub struct OcrRequest {
    /// Unique identifier for this request, threaded through tracing.
    pub request_id: Uuid,
    /// The image to recognize.
    pub source: ImageSource,
}

impl OcrRequest {
    /// Creates a request for the given image source.
    pub fn from_source(source: ImageSource) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            source,
        }
    }

    /// Creates a request from raw image bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::from_source(ImageSource::Bytes(bytes))
    }

    /// Creates a request from an image URL.
    pub fn from_url(url: Url) -> Self {
        Self::from_source(ImageSource::Url(url))
    }

    /// Size of the inline image payload, if any.
    pub fn byte_len(&self) -> Option<usize> {
        match &self.source {
            ImageSource::Bytes(bytes) => Some(bytes.len()),
            ImageSource::Url(_) => None,
        }
    }
}
