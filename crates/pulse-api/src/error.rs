//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::{FromRequest, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Client errors carry a message naming the offending input. Server errors
/// are reported to the client generically; the cause is only logged.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The body could not be decoded into the handler's input type.
  #[error("invalid body: {0}")]
  Body(#[from] JsonRejection),

  /// The store did not confirm a write.
  #[error("store returned no confirmation row")]
  Persistence,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<pulse_core::Error> for ApiError {
  fn from(e: pulse_core::Error) -> Self {
    match e {
      pulse_core::Error::InvalidSignalType(_)
      | pulse_core::Error::InvalidLocationFormat => {
        ApiError::BadRequest(e.to_string())
      }
      pulse_core::Error::Persistence => ApiError::Persistence,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Body(r) => (r.status(), r.body_text()),
      ApiError::Persistence => {
        tracing::error!("no row returned after insert");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          pulse_core::Error::Persistence.to_string(),
        )
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store error");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "Internal server error".to_owned(),
        )
      }
    };
    (status, Json(json!({ "detail": message }))).into_response()
  }
}

/// [`axum::Json`], with rejections reported through [`ApiError`] so every
/// error body has the same `{"detail": ..}` shape.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
