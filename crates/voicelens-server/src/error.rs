//! Handler error type and HTTP status mapping.
//!
//! Every error kind maps to a distinct status code so callers can tell
//! client mistakes, upstream faults and timeouts apart.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use voicelens_core::ErrorKind;

use crate::handler::response::ErrorResponse;

/// Result type alias for handler operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Handler-facing error wrapping the unified pipeline error.
#[derive(Debug)]
pub struct Error(voicelens_core::Error);

impl Error {
    /// Returns the wrapped pipeline error.
    pub fn inner(&self) -> &voicelens_core::Error {
        &self.0
    }

    /// HTTP status code for the wrapped error kind.
    pub fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::InputMissing | ErrorKind::Serialization => StatusCode::BAD_REQUEST,
            ErrorKind::UpstreamRequestFailed | ErrorKind::UpstreamCanceled => {
                StatusCode::BAD_GATEWAY
            }
            ErrorKind::UpstreamTimedOut => StatusCode::GATEWAY_TIMEOUT,
            ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<voicelens_core::Error> for Error {
    fn from(error: voicelens_core::Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::warn!(
            target: "voicelens_server::handler",
            kind = self.0.kind_str(),
            status = status.as_u16(),
            error = %self.0,
            "Request failed"
        );

        let body = ErrorResponse {
            error: self.0.kind_str().to_string(),
            message: self
                .0
                .message
                .clone()
                .unwrap_or_else(|| self.0.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(error: voicelens_core::Error) -> StatusCode {
        Error::from(error).status_code()
    }

    #[test]
    fn each_kind_maps_to_its_status() {
        use voicelens_core::Error as CoreError;

        assert_eq!(status_for(CoreError::input_missing()), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(CoreError::serialization()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(CoreError::upstream_request_failed()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(CoreError::upstream_canceled()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(CoreError::upstream_timed_out()),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_for(CoreError::configuration()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
