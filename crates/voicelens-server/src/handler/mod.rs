//! Routes and handlers for the voicelens HTTP surface.

pub mod request;
pub mod response;

mod utility;
mod voicelens;

use axum::Router;
use axum::routing::{get, post};

use crate::service::ServiceState;

/// Builds the application router.
pub fn routes(state: ServiceState) -> Router {
    Router::new()
        .route("/voicelens", post(voicelens::voicelens))
        .route("/health", get(utility::health))
        .with_state(state)
}
