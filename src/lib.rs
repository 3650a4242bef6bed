//! PDF Process Server
//!
//! A mock PDF processing service: accepts a multipart upload containing a
//! PDF template plus a text field, and echoes the template back unchanged
//! with download headers. Ships with a client helper that performs the
//! matching upload so a frontend (or test) can exercise the full
//! upload/download cycle before the real document pipeline lands.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use client::{UploadClient, UploadClientError};
pub use config::Config;
pub use state::AppState;

/// Build the application router.
///
/// All runtime configuration (bind address, multipart field names, the
/// advertised download filename) comes in through `state`; nothing is
/// hardcoded in the handlers.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::process::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
