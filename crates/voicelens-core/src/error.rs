//! Common error type definitions.
//!
//! Every remote call in the pipeline reports failures through the single
//! [`Error`] type below, so the HTTP layer can map each kind to a
//! distinct status code instead of each call site inventing its own
//! handling.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error as ThisError;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of errors that can occur in voicelens operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The request carried no usable input for the operation.
    InputMissing,
    /// An upstream service rejected or failed the request.
    UpstreamRequestFailed,
    /// An upstream operation did not complete within the allotted time.
    UpstreamTimedOut,
    /// An upstream service canceled the operation and reported details.
    UpstreamCanceled,
    /// Configuration error.
    Configuration,
    /// Serialization/deserialization or encoding error.
    Serialization,
}

/// A structured error type for voicelens operations.
#[derive(Debug, ThisError)]
#[error("{kind:?}{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new input missing error.
    pub fn input_missing() -> Self {
        Self::new(ErrorKind::InputMissing)
    }

    /// Creates a new upstream request failed error.
    pub fn upstream_request_failed() -> Self {
        Self::new(ErrorKind::UpstreamRequestFailed)
    }

    /// Creates a new upstream timed out error.
    pub fn upstream_timed_out() -> Self {
        Self::new(ErrorKind::UpstreamTimedOut)
    }

    /// Creates a new upstream canceled error.
    pub fn upstream_canceled() -> Self {
        Self::new(ErrorKind::UpstreamCanceled)
    }

    /// Creates a new configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Creates a new serialization error.
    pub fn serialization() -> Self {
        Self::new(ErrorKind::Serialization)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }

    /// Whether this error originated from an upstream service.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UpstreamRequestFailed
                | ErrorKind::UpstreamTimedOut
                | ErrorKind::UpstreamCanceled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_strings_are_snake_case() {
        assert_eq!(ErrorKind::InputMissing.as_ref(), "input_missing");
        assert_eq!(
            ErrorKind::UpstreamRequestFailed.as_ref(),
            "upstream_request_failed"
        );
        assert_eq!(ErrorKind::UpstreamTimedOut.as_ref(), "upstream_timed_out");
        assert_eq!(ErrorKind::UpstreamCanceled.as_ref(), "upstream_canceled");
    }

    #[test]
    fn display_includes_message() {
        let error = Error::upstream_canceled().with_message("reason: Error, details: boom");
        assert!(error.to_string().contains("reason: Error, details: boom"));
    }

    #[test]
    fn upstream_classification() {
        assert!(Error::upstream_timed_out().is_upstream());
        assert!(!Error::configuration().is_upstream());
    }
}
