//! Text-to-speech abstractions.
//!
//! Providers synthesize audio from text and return the raw bytes. A remote
//! cancellation surfaces as [`ErrorKind::UpstreamCanceled`] carrying the
//! cancellation reason and error detail in the message.

use std::sync::Arc;

pub mod request;
pub mod response;

pub use request::SpeechRequest;
pub use response::SpeechResponse;

use crate::ServiceHealth;
pub use crate::{Error, ErrorKind, Result};

/// Type alias for a shared, dynamically dispatched speech provider.
pub type BoxedSpeechProvider = Arc<dyn SpeechProvider + Send + Sync>;

/// Tracing target for speech synthesis operations.
pub const TRACING_TARGET: &str = "voicelens_core::speech";

/// Core trait for speech synthesis operations.
#[async_trait::async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesizes the request text into audio bytes.
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse>;

    /// Performs a health check on the speech service.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
