//! JSON REST API for Pulse.
//!
//! Exposes an axum [`Router`] backed by any [`pulse_core::store::ReportStore`].
//! CORS, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = pulse_api::api_router(Arc::new(store)).layer(cors);
//! ```

pub mod error;
pub mod reports;
pub mod signals;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use pulse_core::store::ReportStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ReportStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/report", post(reports::submit::<S>))
    .route("/fetch-reports", get(reports::list::<S>))
    .route("/signal-types", get(signals::list))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
