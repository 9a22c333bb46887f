//! HTTP API application wiring (Axum router + service wiring).
//!
//! Structure:
//! - `services.rs`: composition root (store selection + manager instances)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `errors.rs`: consistent success/error response envelopes

use std::sync::Arc;

use axum::{Extension, Router};

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The managers share one injected store handle; there is no other
/// in-process state, so concurrent requests only race at the store.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(Extension(services))
}
