//! HTTP server assembly for Pulse.
//!
//! Wraps the [`pulse_api`] router with CORS and request tracing, and defines
//! the runtime configuration read by the `pulse-server` binary.

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::{HeaderValue, header::InvalidHeaderValue},
};
use pulse_core::store::ReportStore;
use serde::Deserialize;
use thiserror::Error;
use tower_http::{
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `PULSE_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  pub store_path:      PathBuf,
  /// Origins allowed to call the API from a browser.
  pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            "127.0.0.1".to_string(),
      port:            8000,
      store_path:      PathBuf::from("pulse.db"),
      allowed_origins: vec![
        "http://localhost:8080".to_string(),
        "http://127.0.0.1:8080".to_string(),
      ],
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid CORS origin {origin:?}: {source}")]
  InvalidOrigin {
    origin: String,
    #[source]
    source: InvalidHeaderValue,
  },

  /// `*` cannot be combined with credentialed requests.
  #[error("wildcard CORS origin is not allowed; list each origin explicitly")]
  WildcardOrigin,
}

// ─── CORS ─────────────────────────────────────────────────────────────────────

/// CORS policy: the listed origins only, any method, any header, credentials
/// allowed.
///
/// Methods and headers are mirrored from the preflight request, since a
/// wildcard is not permitted together with credentials.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, Error> {
  if origins.iter().any(|o| o.trim() == "*") {
    return Err(Error::WildcardOrigin);
  }

  let origins = origins
    .iter()
    .map(|o| {
      HeaderValue::from_str(o).map_err(|source| Error::InvalidOrigin {
        origin: o.clone(),
        source,
      })
    })
    .collect::<Result<Vec<_>, _>>()?;

  Ok(
    CorsLayer::new()
      .allow_origin(AllowOrigin::list(origins))
      .allow_methods(AllowMethods::mirror_request())
      .allow_headers(AllowHeaders::mirror_request())
      .allow_credentials(true),
  )
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: API routes, CORS, and per-request tracing.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Result<Router, Error>
where
  S: ReportStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Ok(
    pulse_api::api_router(store)
      .layer(cors_layer(&config.allowed_origins)?)
      .layer(TraceLayer::new_for_http()),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use pulse_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn make_app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    app(Arc::new(store), &ServerConfig::default()).unwrap()
  }

  fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
      .method("OPTIONS")
      .uri("/report")
      .header(header::ORIGIN, origin)
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
      .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
      .body(Body::empty())
      .unwrap()
  }

  #[test]
  fn defaults_match_local_development() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.address(), "127.0.0.1:8000");
    assert_eq!(cfg.allowed_origins, vec![
      "http://localhost:8080",
      "http://127.0.0.1:8080"
    ]);
  }

  #[test]
  fn invalid_origin_is_rejected() {
    let err = cors_layer(&["http://bad\norigin".to_string()]).unwrap_err();
    assert!(err.to_string().contains("invalid CORS origin"));
  }

  #[test]
  fn wildcard_origin_is_rejected() {
    for origins in [vec!["*"], vec!["http://localhost:8080", " * "]] {
      let origins: Vec<String> = origins.into_iter().map(String::from).collect();
      assert!(matches!(cors_layer(&origins), Err(Error::WildcardOrigin)));
    }
  }

  #[tokio::test]
  async fn preflight_from_configured_origin_is_allowed() {
    for origin in ["http://localhost:8080", "http://127.0.0.1:8080"] {
      let resp = make_app().await.oneshot(preflight(origin)).await.unwrap();
      assert_eq!(resp.status(), StatusCode::OK);

      let headers = resp.headers();
      assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], origin);
      assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
      assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
      assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }
  }

  #[tokio::test]
  async fn preflight_from_unknown_origin_gets_no_allow_header() {
    let resp = make_app()
      .await
      .oneshot(preflight("http://evil.example"))
      .await
      .unwrap();
    assert!(!resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
  }

  #[tokio::test]
  async fn simple_request_carries_cors_headers() {
    let req = Request::builder()
      .method("GET")
      .uri("/fetch-reports")
      .header(header::ORIGIN, "http://localhost:8080")
      .body(Body::empty())
      .unwrap();

    let resp = make_app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
      "http://localhost:8080"
    );

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!([]));
  }
}
